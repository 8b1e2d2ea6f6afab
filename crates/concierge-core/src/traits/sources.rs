use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ToolError;
use crate::models::Credentials;

/// Fetches the readable text of a website page.
pub trait IPageSource: Send + Sync {
    fn fetch_text(&self, path: &str) -> Result<String, ToolError>;
}

/// Answers aggregate questions over institutional records. Never returns
/// individual student rows.
pub trait IAggregateSource: Send + Sync {
    fn aggregate(&self, question: &str) -> Result<Map<String, Value>, ToolError>;
}

/// Which slice of portal data to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalData {
    Results,
    Dashboard,
    All,
}

impl PortalData {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Results => "results",
            Self::Dashboard => "dashboard",
            Self::All => "all",
        }
    }
}

/// Logs into a student portal, fetches data, and logs out.
pub trait IPortalClient: Send + Sync {
    fn fetch(&self, credentials: &Credentials, data: PortalData)
        -> Result<Map<String, Value>, ToolError>;
}
