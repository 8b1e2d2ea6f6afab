use super::ErrorKind;

/// Tool execution errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToolError {
    #[error("tool {tool} failed: {reason}")]
    Failed { tool: String, reason: String },

    #[error("tool {tool} timed out after {timeout_ms}ms")]
    Timeout { tool: String, timeout_ms: u64 },

    #[error("tool {tool} blocked by upstream ({marker})")]
    Blocked { tool: String, marker: String },

    #[error("tool {tool} unavailable")]
    Unavailable { tool: String },

    #[error("credentials required")]
    MissingCredentials,

    #[error("login rejected: {reason}")]
    LoginRejected { reason: String },

    #[error("invalid tool input: {reason}")]
    InvalidInput { reason: String },
}

impl ToolError {
    pub fn failed(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::LoginRejected { .. } | Self::MissingCredentials => ErrorKind::LoginFailure,
            Self::InvalidInput { .. } => ErrorKind::Input,
            Self::Failed { .. } | Self::Blocked { .. } | Self::Unavailable { .. } => {
                ErrorKind::ToolFailure
            }
        }
    }
}
