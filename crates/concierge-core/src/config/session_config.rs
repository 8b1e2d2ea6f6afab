use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Raw queries remembered per session.
    pub history_len: usize,
    /// Sessions idle longer than this are dropped by cleanup.
    pub inactivity_timeout_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_len: defaults::DEFAULT_HISTORY_LEN,
            inactivity_timeout_secs: defaults::DEFAULT_SESSION_INACTIVITY_SECS,
        }
    }
}
