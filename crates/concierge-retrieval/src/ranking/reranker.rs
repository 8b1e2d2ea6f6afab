//! Cross-encoder style re-ranking of the final candidates.
//!
//! Scores every (query, passage) pair with an [`IRelevanceModel`] and keeps
//! the best `top_k`. With no model, or any scoring failure, the input order
//! is kept. Never errors.

use std::sync::Arc;

use concierge_core::traits::IRelevanceModel;
use concierge_core::ScoredDocument;
use tracing::warn;

#[derive(Clone, Default)]
pub struct Reranker {
    model: Option<Arc<dyn IRelevanceModel>>,
}

impl Reranker {
    pub fn new(model: Option<Arc<dyn IRelevanceModel>>) -> Self {
        Self { model }
    }

    pub fn passthrough() -> Self {
        Self { model: None }
    }

    pub fn has_model(&self) -> bool {
        self.model.as_ref().is_some_and(|m| m.is_available())
    }

    pub fn rerank(
        &self,
        query: &str,
        mut candidates: Vec<ScoredDocument>,
        top_k: usize,
    ) -> Vec<ScoredDocument> {
        let Some(model) = self.model.as_ref().filter(|m| m.is_available()) else {
            candidates.truncate(top_k);
            return candidates;
        };

        let mut scores = Vec::with_capacity(candidates.len());
        for doc in &candidates {
            match model.score(query, &doc.chunk.text) {
                Ok(s) if !s.is_nan() => scores.push(s),
                Ok(_) => {
                    warn!(model = model.name(), "relevance model returned NaN, keeping retrieval order");
                    candidates.truncate(top_k);
                    return candidates;
                }
                Err(e) => {
                    warn!(model = model.name(), error = %e, "relevance model failed, keeping retrieval order");
                    candidates.truncate(top_k);
                    return candidates;
                }
            }
        }

        let mut paired: Vec<(f64, ScoredDocument)> = scores.into_iter().zip(candidates).collect();
        paired.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        paired.into_iter().take(top_k).map(|(_, doc)| doc).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::errors::{ConciergeResult, RetrievalError};
    use concierge_core::Chunk;

    struct LengthModel;
    impl IRelevanceModel for LengthModel {
        fn score(&self, _query: &str, passage: &str) -> ConciergeResult<f64> {
            Ok(passage.len() as f64)
        }
        fn name(&self) -> &str {
            "length"
        }
    }

    struct BrokenModel;
    impl IRelevanceModel for BrokenModel {
        fn score(&self, _query: &str, _passage: &str) -> ConciergeResult<f64> {
            Err(RetrievalError::ScoringFailed { reason: "oom".into() }.into())
        }
        fn name(&self) -> &str {
            "broken"
        }
    }

    fn docs(texts: &[&str]) -> Vec<ScoredDocument> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| ScoredDocument {
                chunk: Chunk::new(i.to_string(), *t),
                semantic_score: 0.0,
                keyword_score: 0.0,
                fused_score: 0.0,
            })
            .collect()
    }

    #[test]
    fn passthrough_truncates_in_order() {
        let out = Reranker::passthrough().rerank("q", docs(&["a", "bbb", "cc"]), 2);
        let texts: Vec<_> = out.iter().map(|d| d.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "bbb"]);
    }

    #[test]
    fn model_reorders_and_truncates() {
        let r = Reranker::new(Some(Arc::new(LengthModel)));
        let out = r.rerank("q", docs(&["a", "bbb", "cc"]), 2);
        let texts: Vec<_> = out.iter().map(|d| d.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["bbb", "cc"]);
    }

    #[test]
    fn failing_model_keeps_input_order() {
        let r = Reranker::new(Some(Arc::new(BrokenModel)));
        let out = r.rerank("q", docs(&["a", "bbb", "cc"]), 3);
        let texts: Vec<_> = out.iter().map(|d| d.chunk.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "bbb", "cc"]);
    }

    #[test]
    fn empty_input_is_fine() {
        let r = Reranker::new(Some(Arc::new(LengthModel)));
        assert!(r.rerank("q", Vec::new(), 3).is_empty());
    }
}
