use crate::errors::ConciergeResult;

/// Learned (query, passage) relevance function, e.g. a cross-encoder.
pub trait IRelevanceModel: Send + Sync {
    /// Higher is more relevant. Must be deterministic for a fixed model.
    fn score(&self, query: &str, passage: &str) -> ConciergeResult<f64>;

    fn name(&self) -> &str;

    fn is_available(&self) -> bool {
        true
    }
}
