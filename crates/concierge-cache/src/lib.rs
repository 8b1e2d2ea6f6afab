//! # concierge-cache
//!
//! Two-tier cache in front of every tool call.
//!
//! ```text
//! TieredCache
//! ├── Static tier   never expires, key = normalized query
//! └── Dynamic tier  expires lazily on read, key = "{tool}:{normalized input}",
//!                   TTL supplied by the reader
//! ```
//!
//! A key lives in exactly one tier: writing it into one tier replaces any
//! entry in the other. Entries sit in a single sharded map so reads and
//! writes of one key are serialized by its shard lock, and no lock is ever
//! held across a tool call.

pub mod clock;
pub mod entry;
pub mod keys;
pub mod stats;
pub mod tiered;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use tiered::TieredCache;
