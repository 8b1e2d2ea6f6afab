//! Cached, time-bounded tool execution.
//!
//! Every call goes through the tiered cache according to the tool's declared
//! contract. Misses run the tool on the blocking pool under the per-tool
//! timeout from `[tools]`. Only successful results are cached.

use std::sync::Arc;
use std::time::{Duration, Instant};

use concierge_cache::keys::{dynamic_key, static_key};
use concierge_cache::TieredCache;
use concierge_core::config::ToolsConfig;
use concierge_core::errors::ToolError;
use concierge_core::{CachePolicy, InputKind, ToolContract, ToolInput, ToolName, ToolResult};
use concierge_observability::tracing_setup::events;
use concierge_observability::QueryMetrics;
use concierge_tools::{portal_cache_input, portal_data_for_query, ToolRegistry};
use tracing::Instrument;

pub struct ToolExecutor {
    registry: ToolRegistry,
    cache: Arc<TieredCache<ToolResult>>,
    metrics: Arc<QueryMetrics>,
    tools_config: ToolsConfig,
}

/// Cache key for a call, or `None` when the call must not be cached.
///
/// Portal calls without credentials are never cached. The portal key is
/// bound to the full credentials through a digest and never contains the
/// password.
pub fn cache_key(contract: &ToolContract, input: &ToolInput) -> Option<String> {
    match contract.cache {
        CachePolicy::Never => None,
        CachePolicy::Static => Some(static_key(&input.query)),
        CachePolicy::Dynamic { .. } => {
            let keyed_input = match contract.input {
                InputKind::None => String::new(),
                InputKind::Query => input.query.clone(),
                InputKind::CredentialsAndQuery => {
                    let credentials = input.credentials.as_ref()?;
                    portal_cache_input(credentials, portal_data_for_query(&input.query))
                }
            };
            Some(dynamic_key(contract.name, &keyed_input))
        }
    }
}

impl ToolExecutor {
    pub fn new(
        registry: ToolRegistry,
        cache: Arc<TieredCache<ToolResult>>,
        metrics: Arc<QueryMetrics>,
        tools_config: ToolsConfig,
    ) -> Self {
        Self {
            registry,
            cache,
            metrics,
            tools_config,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &Arc<TieredCache<ToolResult>> {
        &self.cache
    }

    pub fn metrics(&self) -> &Arc<QueryMetrics> {
        &self.metrics
    }

    /// Run `tool`, serving from the cache when the contract allows.
    pub async fn execute(&self, tool: ToolName, input: ToolInput) -> Result<ToolResult, ToolError> {
        let span = concierge_observability::tool_span!(tool);
        self.execute_inner(tool, input).instrument(span).await
    }

    async fn execute_inner(&self, tool: ToolName, input: ToolInput) -> Result<ToolResult, ToolError> {
        let handle = self.registry.get(tool).ok_or_else(|| ToolError::Unavailable {
            tool: tool.as_str().into(),
        })?;
        let policy = handle.contract().cache;
        let key = cache_key(handle.contract(), &input);

        if let Some(key) = key.as_deref() {
            let hit = match policy {
                CachePolicy::Static => self.cache.get_static(key),
                CachePolicy::Dynamic { ttl_secs } => self.cache.get_dynamic(key, ttl_secs),
                CachePolicy::Never => None,
            };
            if let Some(mut result) = hit {
                result.cached = true;
                let tier = if policy == CachePolicy::Static { "static" } else { "dynamic" };
                events::cache_hit(tool.as_str(), tier);
                self.metrics.record_tool(tool, true, true, 0);
                return Ok(result);
            }
        }

        let timeout_ms = self.tools_config.timeout_ms(tool);
        let started = Instant::now();
        let task = tokio::task::spawn_blocking(move || handle.call(&input));
        let outcome = match tokio::time::timeout(Duration::from_millis(timeout_ms), task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(ToolError::failed(
                tool.as_str(),
                format!("tool task aborted: {join_error}"),
            )),
            Err(_) => {
                events::tool_timeout(tool.as_str(), timeout_ms);
                Err(ToolError::Timeout {
                    tool: tool.as_str().into(),
                    timeout_ms,
                })
            }
        };
        let latency_ms = started.elapsed().as_millis() as u64;

        match &outcome {
            Ok(result) => {
                if result.success {
                    if let Some(key) = key {
                        match policy {
                            CachePolicy::Static => self.cache.set_static(key, result.clone()),
                            CachePolicy::Dynamic { .. } => self.cache.set_dynamic(key, result.clone()),
                            CachePolicy::Never => {}
                        }
                    }
                }
                events::tool_executed(tool.as_str(), result.success, false, latency_ms);
                self.metrics.record_tool(tool, result.success, false, latency_ms);
            }
            Err(e) => {
                if !matches!(e, ToolError::Timeout { .. }) {
                    events::tool_failed(tool.as_str(), e.kind().as_str(), &e.to_string());
                }
                self.metrics.record_tool(tool, false, false, latency_ms);
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::config::CacheConfig;
    use concierge_core::{Credentials, PortalKind};
    use concierge_tools::contracts::contract_for;

    #[test]
    fn keys_follow_the_contract() {
        let cache = CacheConfig::default();
        let input = ToolInput::query("  Who is the Principal? ");
        assert_eq!(
            cache_key(&contract_for(ToolName::StaticFacts, &cache), &input).as_deref(),
            Some("who is the principal?")
        );
        assert_eq!(
            cache_key(&contract_for(ToolName::LatestNotices, &cache), &input).as_deref(),
            Some("scrape_latest_notices:")
        );
        assert_eq!(
            cache_key(&contract_for(ToolName::Database, &cache), &ToolInput::query("How many placed"))
                .as_deref(),
            Some("query_database:how many placed")
        );
    }

    #[test]
    fn portal_key_needs_credentials_and_hides_password() {
        let contract = contract_for(ToolName::StudentPortal, &CacheConfig::default());
        assert_eq!(cache_key(&contract, &ToolInput::query("my results")), None);

        let input = ToolInput::query("my results").with_credentials(Credentials::new(
            "22K91A05C0",
            "secret123",
            PortalKind::Autonomous,
        ));
        let key = cache_key(&contract, &input).unwrap();
        assert!(key.starts_with("query_student_portal:"));
        assert!(key.contains("22k91a05c0"));
        assert!(!key.contains("secret123"));

        let other = ToolInput::query("my results").with_credentials(Credentials::new(
            "22K91A05C0",
            "wrong-password",
            PortalKind::Autonomous,
        ));
        assert_ne!(cache_key(&contract, &other).unwrap(), key);
    }
}
