//! In-memory query metrics.

mod query_metrics;

pub use query_metrics::{QueryMetrics, QueryMetricsSnapshot, ToolStats};
