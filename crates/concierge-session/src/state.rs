use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use concierge_core::{Credentials, LoginState};
use serde::{Deserialize, Serialize};

/// Everything remembered about one conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: String,
    /// Raw queries of routed turns, oldest first. Never holds credentials.
    pub history: VecDeque<String>,
    pub history_len: usize,
    pub last_topic: Option<String>,
    pub login_state: LoginState,
    pub pending_username: Option<String>,
    /// Skipped on serialization so snapshots never carry the password.
    #[serde(skip)]
    pub credentials: Option<Credentials>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl SessionState {
    pub fn new(session_id: impl Into<String>, history_len: usize) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            history: VecDeque::with_capacity(history_len),
            history_len: history_len.max(1),
            last_topic: None,
            login_state: LoginState::Idle,
            pending_username: None,
            credentials: None,
            created_at: now,
            last_activity: now,
        }
    }

    /// Append a query, dropping the oldest once the bound is reached.
    pub fn push_history(&mut self, query: &str) {
        while self.history.len() >= self.history_len {
            self.history.pop_front();
        }
        self.history.push_back(query.to_string());
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_activity = now;
    }

    pub fn idle_duration(&self, now: DateTime<Utc>) -> Duration {
        now - self.last_activity
    }

    pub fn is_stale(&self, now: DateTime<Utc>, inactivity_timeout: Duration) -> bool {
        self.idle_duration(now) > inactivity_timeout
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::PortalKind;

    #[test]
    fn history_is_bounded() {
        let mut s = SessionState::new("s", 3);
        for q in ["a", "b", "c", "d"] {
            s.push_history(q);
        }
        assert_eq!(s.history, ["b", "c", "d"]);
    }

    #[test]
    fn debug_output_redacts_password() {
        let mut s = SessionState::new("s", 3);
        s.credentials = Some(Credentials::new("22K91A05C0", "secret123", PortalKind::Autonomous));
        let debug = format!("{s:?}");
        assert!(debug.contains("22K91A05C0"));
        assert!(!debug.contains("secret123"));
    }

    #[test]
    fn staleness_uses_inactivity_timeout() {
        let s = SessionState::new("s", 3);
        let later = s.last_activity + Duration::seconds(1801);
        assert!(s.is_stale(later, Duration::seconds(1800)));
        assert!(!s.is_stale(s.last_activity + Duration::seconds(1800), Duration::seconds(1800)));
    }
}
