use concierge_core::{LoginState, ToolName};
use concierge_routing::{IntentRouter, RouteDecision};
use proptest::prelude::*;

proptest! {
    #[test]
    fn active_login_always_collects_credentials(query in ".{0,80}") {
        let router = IntentRouter::new();
        prop_assert_eq!(
            router.route(&query, LoginState::AwaitingUsername),
            RouteDecision::CollectCredential
        );
        prop_assert_eq!(
            router.route(&query, LoginState::AwaitingPassword),
            RouteDecision::CollectCredential
        );
    }

    #[test]
    fn idle_always_routes_to_a_tool(query in ".{0,80}") {
        let decision = IntentRouter::new().route(&query, LoginState::Idle);
        prop_assert!(decision.tool().is_some());
    }

    #[test]
    fn freshness_beats_everything_below_it(
        prefix in "[a-z ]{0,20}",
        suffix in "(how many placed|my results|placement|principal)",
    ) {
        let query = format!("{prefix} latest {suffix}");
        let decision = IntentRouter::new().route(&query, LoginState::Idle);
        prop_assert_eq!(decision.tool(), Some(ToolName::LatestNotices));
    }

    #[test]
    fn how_many_placed_goes_to_database(filler in "[a-z]{0,10}") {
        // Filler must not introduce a freshness or personal-data keyword.
        prop_assume!(!["latest", "recent", "current", "notice", "announcement", "login", "dashboard"]
            .iter()
            .any(|k| filler.starts_with(k)));
        let query = format!("how many {filler} students placed");
        let decision = IntentRouter::new().route(&query, LoginState::Idle);
        prop_assert_eq!(decision.tool(), Some(ToolName::Database));
    }
}
