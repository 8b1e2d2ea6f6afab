/// Retrieval subsystem errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding failed: {provider}: {reason}")]
    EmbeddingFailed { provider: String, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("evidence store failed: {reason}")]
    StoreFailed { reason: String },

    #[error("relevance scoring failed: {reason}")]
    ScoringFailed { reason: String },

    #[error("corpus is empty")]
    EmptyCorpus,
}
