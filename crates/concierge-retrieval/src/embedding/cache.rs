//! Memo of query embeddings, keyed by the blake3 hash of the expanded query.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

pub struct QueryEmbeddingCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl QueryEmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) -> Arc<Vec<f32>> {
        let value = Arc::new(embedding);
        self.cache.insert(Self::key(text), value.clone());
        value
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
