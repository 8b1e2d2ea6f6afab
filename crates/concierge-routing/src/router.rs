use concierge_core::text::normalize;
use concierge_core::{LoginState, ToolName};
use tracing::debug;

use crate::rules::{default_rule, default_rules, RoutingRule, DEFAULT_RULE};

/// Outcome of routing one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The message is a credential for the login in progress.
    CollectCredential,
    Tool {
        tool: ToolName,
        fallback: Option<ToolName>,
        rule: String,
    },
}

impl RouteDecision {
    pub fn tool(&self) -> Option<ToolName> {
        match self {
            Self::CollectCredential => None,
            Self::Tool { tool, .. } => Some(*tool),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<RoutingRule>,
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::with_rules(default_rules())
    }
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a router from an arbitrary table. Rules are ordered by priority
    /// (stable for equal priorities). A catch-all default is appended when the
    /// table has none, so every query routes somewhere.
    pub fn with_rules(mut rules: Vec<RoutingRule>) -> Self {
        rules.sort_by_key(|r| r.priority);
        if !rules.iter().any(|r| r.name == DEFAULT_RULE) {
            rules.push(default_rule());
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[RoutingRule] {
        &self.rules
    }

    pub fn route(&self, query: &str, login: LoginState) -> RouteDecision {
        if login.is_active() {
            debug!(login = login.as_str(), "routing to credential collection");
            return RouteDecision::CollectCredential;
        }

        let normalized = normalize(query);
        let rule = self
            .rules
            .iter()
            .find(|r| r.predicate.matches(&normalized, query));

        match rule {
            Some(rule) => {
                debug!(rule = %rule.name, tool = %rule.tool, "route decided");
                RouteDecision::Tool {
                    tool: rule.tool,
                    fallback: rule.fallback,
                    rule: rule.name.clone(),
                }
            }
            None => {
                let rule = default_rule();
                RouteDecision::Tool {
                    tool: rule.tool,
                    fallback: rule.fallback,
                    rule: rule.name,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::RulePredicate;

    fn tool_for(query: &str) -> ToolName {
        IntentRouter::new()
            .route(query, LoginState::Idle)
            .tool()
            .unwrap()
    }

    #[test]
    fn active_login_short_circuits() {
        let router = IntentRouter::new();
        for state in [LoginState::AwaitingUsername, LoginState::AwaitingPassword] {
            assert_eq!(router.route("latest notices", state), RouteDecision::CollectCredential);
        }
    }

    #[test]
    fn priority_order() {
        assert_eq!(tool_for("latest placement news"), ToolName::LatestNotices);
        assert_eq!(tool_for("show my results"), ToolName::StudentPortal);
        assert_eq!(tool_for("How many students got placed?"), ToolName::Database);
        assert_eq!(tool_for("which companies visit for placement"), ToolName::Placements);
        assert_eq!(tool_for("who is the principal?"), ToolName::StaticFacts);
    }

    #[test]
    fn roll_number_needs_result_word() {
        assert_eq!(tool_for("22K91A05C0 results"), ToolName::StudentPortal);
        assert_eq!(tool_for("22K91A05C0"), ToolName::StaticFacts);
    }

    #[test]
    fn prefix_matching_avoids_inner_words() {
        assert_eq!(tool_for("corporate tie-ups"), ToolName::StaticFacts);
        assert_eq!(tool_for("placement rate"), ToolName::Database);
    }

    #[test]
    fn default_route_carries_search_fallback() {
        let decision = IntentRouter::new().route("tell me about hostels", LoginState::Idle);
        assert_eq!(
            decision,
            RouteDecision::Tool {
                tool: ToolName::StaticFacts,
                fallback: Some(ToolName::WebSearch),
                rule: "default".into(),
            }
        );
    }

    #[test]
    fn rules_are_reorderable() {
        let rules = vec![
            RoutingRule::new("placement", 1, RulePredicate::phrases(&["placed"]), ToolName::Placements),
            RoutingRule::new("aggregate", 2, RulePredicate::phrases(&["how many"]), ToolName::Database),
        ];
        let router = IntentRouter::with_rules(rules);
        assert_eq!(
            router.route("how many placed", LoginState::Idle).tool(),
            Some(ToolName::Placements)
        );
        assert_eq!(router.rules().last().unwrap().name, "default");
    }
}
