use std::collections::HashMap;

use crate::errors::ConciergeResult;
use crate::models::{Chunk, ChunkId};

/// Vector index plus keyword index over an immutable corpus.
pub trait IEvidenceStore: Send + Sync {
    /// Up to `k` chunk ids ordered by ascending L2 distance to `vector`.
    fn nearest_neighbors(&self, vector: &[f32], k: usize) -> ConciergeResult<Vec<(ChunkId, f64)>>;

    /// Keyword relevance for every chunk with non-zero term overlap.
    fn keyword_scores(&self, tokens: &[String]) -> ConciergeResult<HashMap<ChunkId, f64>>;

    fn chunk(&self, id: &str) -> Option<Chunk>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
