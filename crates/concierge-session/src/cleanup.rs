//! Removal of sessions idle past the inactivity timeout.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::manager::SessionManager;

/// Default inactivity timeout: 30 minutes.
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::minutes(30);

/// Remove every session idle for longer than `inactivity_timeout` at `now`.
/// Sessions with a turn in flight are locked and therefore skipped.
///
/// Returns the number of sessions removed.
pub fn cleanup_stale_sessions(
    manager: &SessionManager,
    now: DateTime<Utc>,
    inactivity_timeout: Duration,
) -> usize {
    let mut removed = 0;
    for id in manager.session_ids() {
        let Some(handle) = manager.get(&id) else {
            continue;
        };
        let stale = match handle.try_lock() {
            Ok(state) => state.is_stale(now, inactivity_timeout),
            Err(_) => false,
        };
        if stale && manager.remove(&id).is_some() {
            removed += 1;
        }
    }
    if removed > 0 {
        info!(removed, "stale sessions cleaned up");
    }
    removed
}
