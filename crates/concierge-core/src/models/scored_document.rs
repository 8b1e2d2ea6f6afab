use serde::{Deserialize, Serialize};

use super::Chunk;

/// A chunk with its per-query scores. Discarded after the answer is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub chunk: Chunk,
    /// `1 / (1 + distance)` plus any priority adjustment.
    pub semantic_score: f64,
    /// Raw keyword score, 0 when the chunk had no term overlap.
    pub keyword_score: f64,
    pub fused_score: f64,
}
