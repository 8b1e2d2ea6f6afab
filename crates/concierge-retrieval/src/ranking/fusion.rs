//! Weighted score fusion: `semantic_weight * semantic + keyword_weight * min(keyword / normalizer, 1)`.
//!
//! Ordering is by fused score, descending. The sort is stable, so ties keep
//! input order; the searcher feeds semantic candidates first in
//! nearest-neighbour order, then keyword-only candidates.

use concierge_core::config::defaults;
use concierge_core::config::RetrievalConfig;
use concierge_core::{Chunk, ScoredDocument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FusionWeights {
    pub semantic: f64,
    pub keyword: f64,
    /// Raw keyword scores are divided by this and capped at 1.0.
    pub keyword_normalizer: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            semantic: defaults::DEFAULT_SEMANTIC_WEIGHT,
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            keyword_normalizer: defaults::DEFAULT_KEYWORD_NORMALIZER,
        }
    }
}

impl From<&RetrievalConfig> for FusionWeights {
    fn from(config: &RetrievalConfig) -> Self {
        Self {
            semantic: config.semantic_weight,
            keyword: config.keyword_weight,
            keyword_normalizer: config.keyword_normalizer,
        }
    }
}

impl FusionWeights {
    pub fn fused_score(&self, semantic: f64, keyword: f64) -> f64 {
        let keyword = (keyword / self.keyword_normalizer).min(1.0);
        self.semantic * semantic + self.keyword * keyword
    }
}

/// A candidate before fusion. Missing scores are 0.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub chunk: Chunk,
    pub semantic_score: f64,
    pub keyword_score: f64,
}

/// Score and order candidates. Input order breaks ties.
pub fn fuse(candidates: Vec<Candidate>, weights: &FusionWeights) -> Vec<ScoredDocument> {
    let mut docs: Vec<ScoredDocument> = candidates
        .into_iter()
        .map(|c| ScoredDocument {
            fused_score: weights.fused_score(c.semantic_score, c.keyword_score),
            chunk: c.chunk,
            semantic_score: c.semantic_score,
            keyword_score: c.keyword_score,
        })
        .collect();

    docs.sort_by(|a, b| {
        b.fused_score
            .partial_cmp(&a.fused_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    docs
}
