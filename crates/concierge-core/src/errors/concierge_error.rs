use super::{ConfigError, ErrorKind, RetrievalError, ToolError};

/// Top-level error for the concierge.
#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error("tool error: {0}")]
    ToolError(#[from] ToolError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("generation failed: {reason}")]
    GenerationFailed { reason: String },
}

impl ConciergeError {
    /// Map onto the user-facing error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ToolError(e) => e.kind(),
            Self::RetrievalError(_)
            | Self::ConfigError(_)
            | Self::SerializationError(_)
            | Self::GenerationFailed { .. } => ErrorKind::ToolFailure,
        }
    }
}

pub type ConciergeResult<T> = Result<T, ConciergeError>;
