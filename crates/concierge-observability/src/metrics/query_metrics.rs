//! Per-tool call counts, success rate, cache hits, latency.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use concierge_core::ToolName;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolStats {
    pub calls: u64,
    pub successes: u64,
    pub cache_hits: u64,
    pub total_latency_ms: u64,
}

impl ToolStats {
    pub fn average_latency_ms(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total_latency_ms as f64 / self.calls as f64
        }
    }

    pub fn success_rate(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.successes as f64 / self.calls as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryMetricsSnapshot {
    pub since: DateTime<Utc>,
    pub turns: u64,
    pub canned_replies: u64,
    pub tools: BTreeMap<String, ToolStats>,
}

impl QueryMetricsSnapshot {
    pub fn total_tool_calls(&self) -> u64 {
        self.tools.values().map(|s| s.calls).sum()
    }
}

#[derive(Debug)]
struct Inner {
    turns: u64,
    canned_replies: u64,
    tools: BTreeMap<ToolName, ToolStats>,
}

/// Shared across sessions; every method takes `&self`.
#[derive(Debug)]
pub struct QueryMetrics {
    since: DateTime<Utc>,
    inner: Mutex<Inner>,
}

impl Default for QueryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self {
            since: Utc::now(),
            inner: Mutex::new(Inner {
                turns: 0,
                canned_replies: 0,
                tools: BTreeMap::new(),
            }),
        }
    }

    fn with_inner<T>(&self, f: impl FnOnce(&mut Inner) -> T) -> T {
        // Counters stay usable after a panic elsewhere.
        let mut guard = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut guard)
    }

    pub fn record_turn(&self) {
        self.with_inner(|i| i.turns += 1);
    }

    pub fn record_canned(&self) {
        self.with_inner(|i| i.canned_replies += 1);
    }

    pub fn record_tool(&self, tool: ToolName, success: bool, cached: bool, latency_ms: u64) {
        self.with_inner(|i| {
            let stats = i.tools.entry(tool).or_default();
            stats.calls += 1;
            stats.total_latency_ms += latency_ms;
            if success {
                stats.successes += 1;
            }
            if cached {
                stats.cache_hits += 1;
            }
        });
    }

    pub fn tool(&self, tool: ToolName) -> ToolStats {
        self.with_inner(|i| i.tools.get(&tool).cloned().unwrap_or_default())
    }

    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        self.with_inner(|i| QueryMetricsSnapshot {
            since: self.since,
            turns: i.turns,
            canned_replies: i.canned_replies,
            tools: i
                .tools
                .iter()
                .map(|(k, v)| (k.as_str().to_string(), v.clone()))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_per_tool() {
        let m = QueryMetrics::new();
        m.record_tool(ToolName::StaticFacts, true, false, 4);
        m.record_tool(ToolName::StaticFacts, true, true, 0);
        m.record_tool(ToolName::WebSearch, false, false, 90);

        let facts = m.tool(ToolName::StaticFacts);
        assert_eq!(facts.calls, 2);
        assert_eq!(facts.cache_hits, 1);
        assert_eq!(facts.average_latency_ms(), 2.0);
        assert_eq!(m.tool(ToolName::WebSearch).success_rate(), 0.0);

        let snap = m.snapshot();
        assert_eq!(snap.total_tool_calls(), 3);
        assert!(snap.tools.contains_key("check_static_facts"));
    }

    #[test]
    fn empty_stats_do_not_divide_by_zero() {
        let s = ToolStats::default();
        assert_eq!(s.average_latency_ms(), 0.0);
        assert_eq!(s.success_rate(), 0.0);
    }
}
