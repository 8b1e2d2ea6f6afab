mod cache_config;
pub mod defaults;
mod generation_config;
mod observability_config;
mod retrieval_config;
mod session_config;
mod tools_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use session_config::SessionConfig;
pub use tools_config::ToolsConfig;

use crate::errors::{ConciergeResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConciergeConfig {
    pub retrieval: RetrievalConfig,
    pub cache: CacheConfig,
    pub tools: ToolsConfig,
    pub session: SessionConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl ConciergeConfig {
    pub fn from_toml(s: &str) -> ConciergeResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse {
            document: "concierge config".into(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConciergeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.retrieval;
        if r.k == 0 {
            return Err(ConfigError::invalid("retrieval.k", "must be positive"));
        }
        if r.rerank_top_k == 0 {
            return Err(ConfigError::invalid("retrieval.rerank_top_k", "must be positive"));
        }
        if r.keyword_normalizer <= 0.0 {
            return Err(ConfigError::invalid("retrieval.keyword_normalizer", "must be positive"));
        }
        if r.semantic_weight < 0.0 || r.keyword_weight < 0.0 {
            return Err(ConfigError::invalid(
                "retrieval.semantic_weight/keyword_weight",
                "must be non-negative",
            ));
        }
        if self.session.history_len == 0 {
            return Err(ConfigError::invalid("session.history_len", "must be positive"));
        }
        Ok(())
    }
}
