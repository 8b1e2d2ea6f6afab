use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Documents retrieved per free-text search.
    pub k: usize,
    /// Documents kept after reranking.
    pub rerank_top_k: usize,
    /// Extra candidates for person-seeking queries.
    pub person_k_boost: usize,
    pub semantic_weight: f64,
    pub keyword_weight: f64,
    pub keyword_normalizer: f64,
    pub embedding_dimensions: usize,
    /// Max memoized query embeddings.
    pub embedding_cache_size: u64,
    /// JSON file of chunks to index at startup.
    pub corpus_path: Option<String>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_SEARCH_K,
            rerank_top_k: defaults::DEFAULT_RERANK_TOP_K,
            person_k_boost: defaults::DEFAULT_PERSON_K_BOOST,
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword_weight: defaults::DEFAULT_KEYWORD_WEIGHT,
            keyword_normalizer: defaults::DEFAULT_KEYWORD_NORMALIZER,
            embedding_dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            embedding_cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            corpus_path: None,
        }
    }
}
