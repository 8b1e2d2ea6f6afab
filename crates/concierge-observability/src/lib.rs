//! # concierge-observability
//!
//! Structured tracing (subscriber setup, named events, span macros) and
//! in-memory per-tool query metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{QueryMetrics, QueryMetricsSnapshot, ToolStats};
pub use tracing_setup::{init_tracing, init_tracing_with_filter};
