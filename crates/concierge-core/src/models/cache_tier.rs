use serde::{Deserialize, Serialize};

/// Which tier a cache entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheTier {
    /// Never expires.
    Static,
    /// Expires after a caller-supplied TTL.
    Dynamic,
}
