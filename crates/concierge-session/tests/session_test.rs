use concierge_core::{LoginState, PortalKind};
use concierge_session::{LoginStep, SessionManager, USERNAME_PROMPT};

#[tokio::test]
async fn sessions_are_isolated() {
    let manager = SessionManager::new(3);
    let a = manager.get_or_create("a");
    let b = manager.get_or_create("b");

    {
        let mut state = a.lock().await;
        assert_eq!(state.begin_login(), USERNAME_PROMPT);
        state.resolve_context("placement details");
    }

    let state_b = b.lock().await;
    assert_eq!(state_b.login_state, LoginState::Idle);
    assert!(state_b.last_topic.is_none());
}

#[tokio::test]
async fn concurrent_turns_on_one_session_serialize() {
    let manager = std::sync::Arc::new(SessionManager::new(50));
    let mut tasks = Vec::new();
    for i in 0..20 {
        let manager = manager.clone();
        tasks.push(tokio::spawn(async move {
            let handle = manager.get_or_create("shared");
            let mut state = handle.lock().await;
            state.push_history(&format!("q{i}"));
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }
    let handle = manager.get_or_create("shared");
    assert_eq!(handle.lock().await.history.len(), 20);
}

#[test]
fn username_is_never_the_triggering_query() {
    let mut state = concierge_session::SessionState::new("s", 3);
    state.begin_login();
    // The next message, not "my results", becomes the username.
    state.accept_credential("22K91A05C0", PortalKind::Autonomous);
    assert_eq!(state.pending_username.as_deref(), Some("22K91A05C0"));
    assert_eq!(state.accept_credential("secret123", PortalKind::Autonomous), LoginStep::Complete);
}
