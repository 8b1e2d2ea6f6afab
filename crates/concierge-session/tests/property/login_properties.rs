use concierge_core::{LoginState, PortalKind};
use concierge_session::{LoginStep, SessionState, PASSWORD_PROMPT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn two_non_blank_messages_always_finish_idle(
        user in "[A-Za-z0-9]{1,12}",
        pass in "[ -~]{1,20}",
    ) {
        prop_assume!(!pass.trim().is_empty());
        let mut s = SessionState::new("p", 3);
        s.begin_login();
        prop_assert_eq!(
            s.accept_credential(&user, PortalKind::Autonomous),
            LoginStep::Prompt(PASSWORD_PROMPT)
        );
        prop_assert_eq!(s.accept_credential(&pass, PortalKind::Autonomous), LoginStep::Complete);
        prop_assert_eq!(s.login_state, LoginState::Idle);
        let c = s.credentials.clone().unwrap();
        prop_assert_eq!(c.username, user.to_uppercase());
        prop_assert_eq!(c.password, pass.trim());
    }

    #[test]
    fn history_never_exceeds_bound(queries in prop::collection::vec(".{0,20}", 0..20), len in 1usize..6) {
        let mut s = SessionState::new("p", len);
        for q in &queries {
            s.push_history(q);
        }
        prop_assert!(s.history.len() <= len);
        prop_assert_eq!(s.history.len(), queries.len().min(len));
    }
}
