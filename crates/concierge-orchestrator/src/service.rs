//! ConciergeService: many conversations over one orchestrator.
//!
//! Turns of one session are serialized by the session's async mutex; turns
//! of different sessions run in parallel.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use concierge_core::config::SessionConfig;
use concierge_session::{cleanup_stale_sessions, SessionManager};

use crate::answer::Answer;
use crate::orchestrator::QueryOrchestrator;

pub struct ConciergeService {
    sessions: SessionManager,
    orchestrator: Arc<QueryOrchestrator>,
    inactivity_timeout: Duration,
}

impl ConciergeService {
    pub fn new(orchestrator: Arc<QueryOrchestrator>, config: &SessionConfig) -> Self {
        Self {
            sessions: SessionManager::new(config.history_len),
            orchestrator,
            inactivity_timeout: Duration::seconds(config.inactivity_timeout_secs),
        }
    }

    /// Answer `message` in the conversation `session_id`, creating it on first use.
    pub async fn handle(&self, session_id: &str, message: &str) -> Answer {
        let handle = self.sessions.get_or_create(session_id);
        let mut state = handle.lock().await;
        self.orchestrator.answer(&mut state, message).await
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn orchestrator(&self) -> &Arc<QueryOrchestrator> {
        &self.orchestrator
    }

    /// Drop conversations idle past the configured timeout.
    pub fn cleanup(&self, now: DateTime<Utc>) -> usize {
        cleanup_stale_sessions(&self.sessions, now, self.inactivity_timeout)
    }
}
