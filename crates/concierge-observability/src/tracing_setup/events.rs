//! Structured log events for key operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// Log a completed tool call.
pub fn tool_executed(tool: &str, success: bool, cached: bool, latency_ms: u64) {
    tracing::info!(
        event = "tool_executed",
        tool = %tool,
        success = success,
        cached = cached,
        latency_ms = latency_ms,
        "tool executed"
    );
}

/// Log a cache hit.
pub fn cache_hit(tool: &str, tier: &str) {
    tracing::debug!(event = "cache_hit", tool = %tool, tier = %tier, "cache hit");
}

/// Log the routing decision for a turn.
pub fn route_decided(rule: &str, tool: &str) {
    tracing::info!(event = "route_decided", rule = %rule, tool = %tool, "route decided");
}

/// Log an external call that ran past its deadline.
pub fn tool_timeout(tool: &str, timeout_ms: u64) {
    tracing::warn!(
        event = "tool_timeout",
        tool = %tool,
        timeout_ms = timeout_ms,
        "tool timed out"
    );
}

/// Log a tool failure that was turned into a user-facing apology.
pub fn tool_failed(tool: &str, kind: &str, error: &str) {
    tracing::warn!(
        event = "tool_failed",
        tool = %tool,
        kind = %kind,
        error = %error,
        "tool failed"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a login state change. Never carries credential values.
pub fn login_transition(session: &str, from: &str, to: &str) {
    tracing::info!(
        event = "login_transition",
        session = %session,
        from = %from,
        to = %to,
        "login transition"
    );
}
