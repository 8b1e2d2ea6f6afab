use serde::{Deserialize, Serialize};

/// Position in the two-turn credential collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    #[default]
    Idle,
    AwaitingUsername,
    AwaitingPassword,
}

impl LoginState {
    /// True while the next message must be treated as a credential.
    pub fn is_active(self) -> bool {
        self != Self::Idle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingUsername => "awaiting_username",
            Self::AwaitingPassword => "awaiting_password",
        }
    }
}
