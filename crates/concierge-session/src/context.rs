//! Follow-up resolution. An approximate string heuristic: a query opening
//! with a follow-up phrase borrows the topic of an earlier query.

use concierge_core::text::{contains_phrase, normalize};

use crate::state::SessionState;

const FOLLOW_UP_PHRASES: &[&str] = &["what about", "how about", "and", "also"];

/// (trigger, topic phrase) in precedence order.
const TOPICS: &[(&[&str], &str)] = &[
    (&["placement", "placed"], "placement statistics for"),
    (&["admission"], "admission information for"),
    (&["fee"], "fee structure for"),
    (&["hod"], "head of department for"),
];

/// If `query` opens with a follow-up phrase followed by a word boundary,
/// returns the remainder with original casing.
fn follow_up_rest(query: &str) -> Option<&str> {
    let trimmed = query.trim_start();
    FOLLOW_UP_PHRASES.iter().find_map(|phrase| {
        let head = trimmed.get(..phrase.len())?;
        if !head.eq_ignore_ascii_case(phrase) {
            return None;
        }
        let rest = &trimmed[phrase.len()..];
        match rest.chars().next() {
            Some(c) if c.is_alphanumeric() => None,
            _ => Some(rest.trim()),
        }
    })
}

fn topic_for(query: &str) -> Option<&'static str> {
    let q = normalize(query);
    TOPICS
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| contains_phrase(&q, t)))
        .map(|(_, topic)| *topic)
}

impl SessionState {
    /// Rewrite a follow-up against the remembered topic, or remember the
    /// topic of a fresh query. Returns the query to route.
    pub fn resolve_context(&mut self, query: &str) -> String {
        if let (Some(topic), Some(rest)) = (self.last_topic.as_deref(), follow_up_rest(query)) {
            return format!("{topic} {rest}").trim_end().to_string();
        }
        if let Some(topic) = topic_for(query) {
            self.last_topic = Some(topic.to_string());
        }
        query.to_string()
    }
}
