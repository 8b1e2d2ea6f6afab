use std::sync::Arc;

use concierge_cache::{ManualClock, TieredCache};
use concierge_core::CacheTier;
use proptest::prelude::*;

proptest! {
    #[test]
    fn dynamic_entry_visible_iff_younger_than_ttl(age in 0i64..10_000, ttl in 1u64..10_000) {
        let clock = Arc::new(ManualClock::default());
        let cache: TieredCache<u32> = TieredCache::with_clock(clock.clone());
        cache.set_dynamic("k", 7);
        clock.advance(age);
        let got = cache.get_dynamic("k", ttl);
        prop_assert_eq!(got.is_some(), (age as u64) < ttl);
    }

    #[test]
    fn static_entry_survives_any_age(age in 0i64..1_000_000_000) {
        let clock = Arc::new(ManualClock::default());
        let cache: TieredCache<u32> = TieredCache::with_clock(clock.clone());
        cache.set_static("k", 1);
        clock.advance(age);
        prop_assert_eq!(cache.get_static("k"), Some(1));
    }

    #[test]
    fn tier_follows_last_write(writes in proptest::collection::vec(any::<bool>(), 1..20)) {
        let cache: TieredCache<usize> = TieredCache::new();
        for (i, is_static) in writes.iter().enumerate() {
            if *is_static {
                cache.set_static("k", i);
            } else {
                cache.set_dynamic("k", i);
            }
        }
        let last_static = *writes.last().unwrap();
        let expected = if last_static { CacheTier::Static } else { CacheTier::Dynamic };
        prop_assert_eq!(cache.tier_of("k"), Some(expected));
        prop_assert_eq!(cache.len(), 1);
    }
}
