//! Ollama text generation client.
//!
//! Calls `/api/generate` without streaming. Availability is decided by a
//! health check against `/api/tags`; an unavailable client is skipped by the
//! orchestrator and answers fall back to raw tool output.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use concierge_core::config::GenerationConfig;
use concierge_core::errors::{ConciergeError, ConciergeResult};
use concierge_core::traits::ILanguageModel;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 150;

pub struct OllamaClient {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
    available: AtomicBool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

fn generation_failed(reason: impl Into<String>) -> ConciergeError {
    ConciergeError::GenerationFailed {
        reason: reason.into(),
    }
}

impl OllamaClient {
    /// `endpoint` is the full `/api/generate` URL.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, timeout_ms: u64) -> ConciergeResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| generation_failed(format!("http client: {e}")))?;
        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
            available: AtomicBool::new(false), // Must pass health check first.
        })
    }

    pub fn from_config(config: &GenerationConfig) -> ConciergeResult<Self> {
        Self::new(&config.endpoint, &config.model, config.timeout_ms)
    }

    fn tags_url(&self) -> String {
        match self.endpoint.find("/api/") {
            Some(idx) => format!("{}/api/tags", &self.endpoint[..idx]),
            None => format!("{}/api/tags", self.endpoint.trim_end_matches('/')),
        }
    }

    /// Check whether the Ollama server is reachable and record the outcome.
    pub fn health_check(&self) -> bool {
        let result = self.client.get(self.tags_url()).timeout(HEALTH_TIMEOUT).send();
        let ok = match result {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable, answers will use raw tool output");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }
}

impl ILanguageModel for OllamaClient {
    fn generate(&self, prompt: &str) -> ConciergeResult<String> {
        if !self.is_available() {
            return Err(generation_failed("Ollama unavailable"));
        }
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: TEMPERATURE,
                num_predict: MAX_TOKENS,
            },
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| generation_failed(format!("Ollama HTTP error: {e}")))?;

        if !response.status().is_success() {
            return Err(generation_failed(format!("Ollama returned {}", response.status())));
        }
        let body: GenerateResponse = response
            .json()
            .map_err(|e| generation_failed(format!("Ollama JSON parse error: {e}")))?;
        let text = body.response.trim();
        if text.is_empty() {
            return Err(generation_failed("empty response"));
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unavailable() {
        let client = OllamaClient::from_config(&GenerationConfig::default()).unwrap();
        assert!(!client.is_available());
        assert!(matches!(
            client.generate("hi"),
            Err(ConciergeError::GenerationFailed { .. })
        ));
    }

    #[test]
    fn tags_url_is_derived_from_endpoint() {
        let client = OllamaClient::new("http://localhost:11434/api/generate", "m", 1000).unwrap();
        assert_eq!(client.tags_url(), "http://localhost:11434/api/tags");
        let bare = OllamaClient::new("http://ollama:11434/", "m", 1000).unwrap();
        assert_eq!(bare.tags_url(), "http://ollama:11434/api/tags");
    }
}
