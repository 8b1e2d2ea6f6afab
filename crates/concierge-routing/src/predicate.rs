use std::sync::LazyLock;

use concierge_core::text::{contains_any, has_word};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::keywords::ROLL_NUMBER_PATTERN;

static ROLL_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(ROLL_NUMBER_PATTERN).ok());

/// True when the text carries something shaped like a roll number.
pub fn has_roll_number(text: &str) -> bool {
    ROLL_NUMBER.as_ref().is_some_and(|re| re.is_match(text))
}

/// Condition a rule tests against the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum RulePredicate {
    /// Any phrase matches at a word start.
    AnyPhrase(Vec<String>),
    /// Any word matches as a whole token.
    AnyWord(Vec<String>),
    RollNumber,
    AllOf(Vec<RulePredicate>),
    AnyOf(Vec<RulePredicate>),
    Always,
}

impl RulePredicate {
    pub fn phrases(phrases: &[&str]) -> Self {
        Self::AnyPhrase(phrases.iter().map(|p| p.to_string()).collect())
    }

    pub fn words(words: &[&str]) -> Self {
        Self::AnyWord(words.iter().map(|w| w.to_string()).collect())
    }

    /// `normalized` is the lower-cased query, `raw` the original text.
    pub fn matches(&self, normalized: &str, raw: &str) -> bool {
        match self {
            Self::AnyPhrase(list) => {
                let refs: Vec<&str> = list.iter().map(String::as_str).collect();
                contains_any(normalized, &refs)
            }
            Self::AnyWord(list) => list.iter().any(|w| has_word(normalized, w)),
            Self::RollNumber => has_roll_number(raw),
            Self::AllOf(parts) => parts.iter().all(|p| p.matches(normalized, raw)),
            Self::AnyOf(parts) => parts.iter().any(|p| p.matches(normalized, raw)),
            Self::Always => true,
        }
    }
}
