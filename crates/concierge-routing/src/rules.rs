use concierge_core::ToolName;
use serde::{Deserialize, Serialize};

use crate::keywords;
use crate::predicate::RulePredicate;

/// One row of the routing table. Lower `priority` is evaluated first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRule {
    pub name: String,
    pub priority: u32,
    pub predicate: RulePredicate,
    pub tool: ToolName,
    /// Tool to try in the same turn when `tool` misses or fails.
    #[serde(default)]
    pub fallback: Option<ToolName>,
}

impl RoutingRule {
    pub fn new(name: &str, priority: u32, predicate: RulePredicate, tool: ToolName) -> Self {
        Self {
            name: name.to_string(),
            priority,
            predicate,
            tool,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: ToolName) -> Self {
        self.fallback = Some(fallback);
        self
    }
}

pub const DEFAULT_RULE: &str = "default";

/// Rule that matches everything: static facts, then free-text search.
pub fn default_rule() -> RoutingRule {
    RoutingRule::new(DEFAULT_RULE, u32::MAX, RulePredicate::Always, ToolName::StaticFacts)
        .with_fallback(ToolName::WebSearch)
}

pub fn default_rules() -> Vec<RoutingRule> {
    vec![
        RoutingRule::new(
            "freshness",
            10,
            RulePredicate::phrases(keywords::FRESHNESS),
            ToolName::LatestNotices,
        ),
        RoutingRule::new(
            "personal_data",
            20,
            RulePredicate::AnyOf(vec![
                RulePredicate::phrases(keywords::PERSONAL_DATA),
                RulePredicate::AllOf(vec![
                    RulePredicate::RollNumber,
                    RulePredicate::phrases(keywords::PORTAL_WITH_ROLL),
                ]),
            ]),
            ToolName::StudentPortal,
        ),
        RoutingRule::new(
            "aggregate",
            30,
            RulePredicate::AnyOf(vec![
                RulePredicate::phrases(keywords::AGGREGATE),
                RulePredicate::words(keywords::AGGREGATE_WORDS),
            ]),
            ToolName::Database,
        ),
        RoutingRule::new(
            "placement",
            40,
            RulePredicate::phrases(keywords::PLACEMENT),
            ToolName::Placements,
        ),
        default_rule(),
    ]
}
