use serde::{Deserialize, Serialize};

use super::defaults;

/// Dynamic tier lifetimes, per tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub notices_ttl_secs: u64,
    pub placements_ttl_secs: u64,
    pub database_ttl_secs: u64,
    pub search_ttl_secs: u64,
    pub portal_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            notices_ttl_secs: defaults::DEFAULT_NOTICES_TTL_SECS,
            placements_ttl_secs: defaults::DEFAULT_PLACEMENTS_TTL_SECS,
            database_ttl_secs: defaults::DEFAULT_DATABASE_TTL_SECS,
            search_ttl_secs: defaults::DEFAULT_SEARCH_TTL_SECS,
            portal_ttl_secs: defaults::DEFAULT_PORTAL_TTL_SECS,
        }
    }
}
