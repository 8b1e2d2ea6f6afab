use chrono::{DateTime, Utc};
use concierge_core::CacheTier;

/// One cached value and where it lives.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub created_at: DateTime<Utc>,
    pub tier: CacheTier,
}

impl<V> CacheEntry<V> {
    /// Whole seconds since the entry was written. Never negative.
    pub fn age_secs(&self, now: DateTime<Utc>) -> u64 {
        (now - self.created_at).num_seconds().max(0) as u64
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl_secs: u64) -> bool {
        self.age_secs(now) >= ttl_secs
    }
}
