use std::fmt;

use serde::{Deserialize, Serialize};

/// Which student portal the credentials belong to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalKind {
    Regular,
    #[default]
    Autonomous,
}

impl PortalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Autonomous => "autonomous",
        }
    }
}

/// Portal login collected over two turns. The password never leaves this struct
/// except on the way to the portal client.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub portal_kind: PortalKind,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        portal_kind: PortalKind,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            portal_kind,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("portal_kind", &self.portal_kind)
            .finish()
    }
}
