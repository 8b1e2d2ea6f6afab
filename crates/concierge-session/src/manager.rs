//! SessionManager: one async mutex per conversation, sessions in a DashMap.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::state::SessionState;

/// Turns of one session hold this lock for their whole duration.
pub type SessionHandle = Arc<Mutex<SessionState>>;

pub struct SessionManager {
    sessions: DashMap<String, SessionHandle>,
    history_len: usize,
}

impl SessionManager {
    pub fn new(history_len: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            history_len,
        }
    }

    /// Handle for `session_id`, creating the session on first use.
    pub fn get_or_create(&self, session_id: &str) -> SessionHandle {
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session = session_id, "session created");
                Arc::new(Mutex::new(SessionState::new(session_id, self.history_len)))
            })
            .clone()
    }

    /// Create a session under a fresh random id.
    pub fn create(&self) -> (String, SessionHandle) {
        let id = uuid::Uuid::new_v4().to_string();
        let handle = self.get_or_create(&id);
        (id, handle)
    }

    pub fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.get(session_id).map(|r| r.value().clone())
    }

    pub fn remove(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(concierge_core::constants::HISTORY_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_id_same_state() {
        let manager = SessionManager::new(3);
        let a = manager.get_or_create("alice");
        a.lock().await.push_history("hello there");
        let again = manager.get_or_create("alice");
        assert_eq!(again.lock().await.history.len(), 1);
        assert!(Arc::ptr_eq(&a, &again));
        assert_eq!(manager.session_count(), 1);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let manager = SessionManager::default();
        let (a, _) = manager.create();
        let (b, _) = manager.create();
        assert_ne!(a, b);
        assert_eq!(manager.session_count(), 2);
        assert!(manager.remove(&a).is_some());
        assert!(manager.get(&a).is_none());
    }
}
