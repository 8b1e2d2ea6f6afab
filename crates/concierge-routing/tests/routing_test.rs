use concierge_core::{LoginState, ToolName};
use concierge_routing::{default_rules, IntentRouter, RouteDecision, RoutingRule, RulePredicate};

fn route(query: &str) -> Option<ToolName> {
    IntentRouter::new().route(query, LoginState::Idle).tool()
}

#[test]
fn freshness_keywords_route_to_notices() {
    for q in [
        "Any recent announcements?",
        "current events on campus",
        "show notices",
    ] {
        assert_eq!(route(q), Some(ToolName::LatestNotices), "{q}");
    }
}

#[test]
fn personal_data_keywords_route_to_portal() {
    for q in [
        "my results",
        "check my attendance",
        "what are my grades",
        "my marks in sem 3",
        "student portal login",
        "open dashboard",
    ] {
        assert_eq!(route(q), Some(ToolName::StudentPortal), "{q}");
    }
}

#[test]
fn aggregate_keywords_route_to_database() {
    for q in [
        "average cgpa of placed students",
        "highest package offered",
        "top companies",
        "placement statistics for CSE?",
        "number of students placed",
    ] {
        assert_eq!(route(q), Some(ToolName::Database), "{q}");
    }
}

#[test]
fn count_is_a_whole_word() {
    assert_eq!(route("placement count"), Some(ToolName::Database));
    assert_eq!(route("count of students placed in 2024"), Some(ToolName::Database));
    assert_eq!(route("which country is TKRCET affiliated to"), Some(ToolName::StaticFacts));
    assert_eq!(route("where is the fee counter"), Some(ToolName::StaticFacts));
}

#[test]
fn placement_keywords_route_to_placements() {
    for q in ["placement details", "job opportunities", "who recruits from campus"] {
        assert_eq!(route(q), Some(ToolName::Placements), "{q}");
    }
}

#[test]
fn default_table_is_in_priority_order() {
    let router = IntentRouter::new();
    let priorities: Vec<u32> = router.rules().iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
    assert_eq!(router.rules().len(), default_rules().len());
}

#[test]
fn rule_table_round_trips_through_json() {
    let rules = default_rules();
    let json = serde_json::to_string(&rules).unwrap();
    let back: Vec<RoutingRule> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

#[test]
fn custom_table_without_default_still_routes() {
    let router = IntentRouter::with_rules(vec![RoutingRule::new(
        "library",
        5,
        RulePredicate::phrases(&["library"]),
        ToolName::WebSearch,
    )]);
    assert_eq!(
        router.route("library hours", LoginState::Idle).tool(),
        Some(ToolName::WebSearch)
    );
    match router.route("principal", LoginState::Idle) {
        RouteDecision::Tool { tool, fallback, .. } => {
            assert_eq!(tool, ToolName::StaticFacts);
            assert_eq!(fallback, Some(ToolName::WebSearch));
        }
        other => panic!("unexpected {other:?}"),
    }
}
