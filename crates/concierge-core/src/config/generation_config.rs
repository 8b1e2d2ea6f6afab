use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer formatting through an optional local language model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub llm_enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    pub min_chars: usize,
    pub normalizer_timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            llm_enabled: defaults::DEFAULT_LLM_ENABLED,
            endpoint: defaults::DEFAULT_LLM_ENDPOINT.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            timeout_ms: defaults::DEFAULT_LLM_TIMEOUT_MS,
            min_chars: defaults::DEFAULT_LLM_MIN_CHARS,
            normalizer_timeout_ms: defaults::DEFAULT_NORMALIZER_TIMEOUT_MS,
        }
    }
}
