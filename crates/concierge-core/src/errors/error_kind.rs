use serde::{Deserialize, Serialize};

/// Coarse failure classes the orchestrator matches on when building a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty or unusable user input.
    Input,
    /// No fact or rule answered the query.
    RoutingMiss,
    /// A tool or collaborator failed.
    ToolFailure,
    /// A tool or collaborator did not answer in time.
    Timeout,
    /// The portal rejected the stored credentials.
    LoginFailure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::RoutingMiss => "routing_miss",
            Self::ToolFailure => "tool_failure",
            Self::Timeout => "timeout",
            Self::LoginFailure => "login_failure",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
