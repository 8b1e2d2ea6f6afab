//! In-memory evidence store.

mod bm25;
mod vector;

use std::collections::HashMap;
use std::path::Path;

use concierge_core::errors::{ConciergeError, ConciergeResult, RetrievalError};
use concierge_core::traits::{IEmbeddingProvider, IEvidenceStore};
use concierge_core::{Chunk, ChunkId};
use tracing::info;

pub use bm25::Bm25Index;
pub use vector::l2_distance;

/// Immutable corpus with an exact vector index and a BM25 keyword index.
pub struct MemoryEvidenceStore {
    chunks: Vec<Chunk>,
    by_id: HashMap<ChunkId, usize>,
    keywords: Bm25Index,
    dimensions: usize,
}

impl MemoryEvidenceStore {
    /// Index `chunks`, embedding any that arrive without a vector.
    pub fn build(mut chunks: Vec<Chunk>, embedder: &dyn IEmbeddingProvider) -> ConciergeResult<Self> {
        let missing: Vec<usize> = chunks
            .iter()
            .enumerate()
            .filter(|(_, c)| c.embedding.is_empty())
            .map(|(i, _)| i)
            .collect();
        if !missing.is_empty() {
            let texts: Vec<String> = missing.iter().map(|&i| chunks[i].text.clone()).collect();
            let vectors = embedder.embed_batch(&texts)?;
            for (i, v) in missing.into_iter().zip(vectors) {
                chunks[i].embedding = v;
            }
        }

        let dimensions = embedder.dimensions();
        if let Some(bad) = chunks.iter().find(|c| c.embedding.len() != dimensions) {
            return Err(RetrievalError::DimensionMismatch {
                expected: dimensions,
                actual: bad.embedding.len(),
            }
            .into());
        }

        let by_id = chunks
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
        let keywords = Bm25Index::build(chunks.iter().map(|c| c.text.as_str()));

        info!(
            chunks = chunks.len(),
            dimensions,
            provider = embedder.name(),
            "evidence store built"
        );
        Ok(Self {
            chunks,
            by_id,
            keywords,
            dimensions,
        })
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }
}

impl IEvidenceStore for MemoryEvidenceStore {
    fn nearest_neighbors(&self, vector: &[f32], k: usize) -> ConciergeResult<Vec<(ChunkId, f64)>> {
        if vector.len() != self.dimensions {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            }
            .into());
        }
        Ok(
            vector::nearest(vector, self.chunks.iter().map(|c| c.embedding.as_slice()), k)
                .into_iter()
                .map(|(i, d)| (self.chunks[i].id.clone(), d))
                .collect(),
        )
    }

    fn keyword_scores(&self, tokens: &[String]) -> ConciergeResult<HashMap<ChunkId, f64>> {
        Ok(self
            .keywords
            .scores(tokens)
            .into_iter()
            .map(|(i, s)| (self.chunks[i].id.clone(), s))
            .collect())
    }

    fn chunk(&self, id: &str) -> Option<Chunk> {
        self.by_id.get(id).map(|&i| self.chunks[i].clone())
    }

    fn len(&self) -> usize {
        self.chunks.len()
    }
}

/// Read a JSON array of chunks.
pub fn load_chunks(path: impl AsRef<Path>) -> ConciergeResult<Vec<Chunk>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConciergeError::RetrievalError(RetrievalError::StoreFailed {
            reason: format!("{}: {e}", path.display()),
        })
    })?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashingEmbedder;

    fn store() -> MemoryEvidenceStore {
        let chunks = vec![
            Chunk::new("c1", "Central Library timings 9 AM to 5 PM"),
            Chunk::new("c2", "Hostel facilities for boys and girls"),
            Chunk::new("c3", "Library has 50,000 books"),
        ];
        MemoryEvidenceStore::build(chunks, &HashingEmbedder::new(64)).unwrap()
    }

    #[test]
    fn build_embeds_missing_vectors() {
        let s = store();
        assert_eq!(s.len(), 3);
        assert!(s.chunks().iter().all(|c| c.embedding.len() == 64));
    }

    #[test]
    fn nearest_neighbors_respects_k() {
        let s = store();
        let q = HashingEmbedder::new(64).embed("library").unwrap();
        let nn = s.nearest_neighbors(&q, 2).unwrap();
        assert_eq!(nn.len(), 2);
        assert!(nn[0].1 <= nn[1].1);
    }

    #[test]
    fn wrong_dimension_query_is_rejected() {
        let s = store();
        assert!(s.nearest_neighbors(&[0.0; 3], 2).is_err());
    }

    #[test]
    fn prebuilt_vectors_must_match_dimensions() {
        let mut c = Chunk::new("x", "text");
        c.embedding = vec![1.0, 2.0];
        let err = MemoryEvidenceStore::build(vec![c], &HashingEmbedder::new(64));
        assert!(err.is_err());
    }

    #[test]
    fn keyword_scores_by_chunk_id() {
        let s = store();
        let scores = s.keyword_scores(&["library".to_string()]).unwrap();
        assert_eq!(scores.len(), 2);
        assert!(scores.contains_key("c1") && scores.contains_key("c3"));
    }

    #[test]
    fn chunk_lookup() {
        let s = store();
        assert_eq!(s.chunk("c2").unwrap().id, "c2");
        assert!(s.chunk("nope").is_none());
    }
}
