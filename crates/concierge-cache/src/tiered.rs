use std::sync::Arc;

use concierge_core::CacheTier;
use dashmap::DashMap;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::entry::CacheEntry;
use crate::stats::{CacheStats, CacheStatsSnapshot};

/// Static + dynamic cache over one sharded map.
pub struct TieredCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    clock: Arc<dyn Clock>,
    stats: CacheStats,
}

enum Lookup<V> {
    Hit(V),
    Expired,
    Miss,
}

impl<V: Clone> TieredCache<V> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            stats: CacheStats::default(),
        }
    }

    /// Permanent lookup. Dynamic entries under the same key are invisible here.
    pub fn get_static(&self, key: &str) -> Option<V> {
        let found = self
            .entries
            .get(key)
            .filter(|e| e.tier == CacheTier::Static)
            .map(|e| e.value.clone());
        match found {
            Some(v) => {
                self.stats.hit();
                Some(v)
            }
            None => {
                self.stats.miss();
                None
            }
        }
    }

    pub fn set_static(&self, key: impl Into<String>, value: V) {
        self.insert(key.into(), value, CacheTier::Static);
    }

    /// TTL-bound lookup. An entry aged `>= ttl_secs` is evicted and reported as a miss.
    pub fn get_dynamic(&self, key: &str, ttl_secs: u64) -> Option<V> {
        let now = self.clock.now();
        // Shard guard must be released before remove_if touches the same shard.
        let lookup = match self.entries.get(key) {
            Some(e) if e.tier == CacheTier::Dynamic => {
                if e.is_expired(now, ttl_secs) {
                    Lookup::Expired
                } else {
                    Lookup::Hit(e.value.clone())
                }
            }
            _ => Lookup::Miss,
        };

        match lookup {
            Lookup::Hit(v) => {
                self.stats.hit();
                Some(v)
            }
            Lookup::Expired => {
                // A concurrent writer may have refreshed the entry in between.
                let removed = self.entries.remove_if(key, |_, e| {
                    e.tier == CacheTier::Dynamic && e.is_expired(now, ttl_secs)
                });
                if removed.is_some() {
                    self.stats.evicted();
                    debug!(key, ttl_secs, "dynamic cache entry expired");
                }
                self.stats.miss();
                None
            }
            Lookup::Miss => {
                self.stats.miss();
                None
            }
        }
    }

    pub fn set_dynamic(&self, key: impl Into<String>, value: V) {
        self.insert(key.into(), value, CacheTier::Dynamic);
    }

    /// Which tier currently holds `key`.
    pub fn tier_of(&self, key: &str) -> Option<CacheTier> {
        self.entries.get(key).map(|e| e.tier)
    }

    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    // Last write wins; replacing the entry also moves it between tiers.
    fn insert(&self, key: String, value: V, tier: CacheTier) {
        let entry = CacheEntry {
            value,
            created_at: self.clock.now(),
            tier,
        };
        self.entries.insert(key, entry);
    }
}

impl<V: Clone> Default for TieredCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
