use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Credentials;

/// Every capability the router can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ToolName {
    #[serde(rename = "check_static_facts")]
    StaticFacts,
    #[serde(rename = "scrape_latest_notices")]
    LatestNotices,
    #[serde(rename = "scrape_placements")]
    Placements,
    #[serde(rename = "query_database")]
    Database,
    #[serde(rename = "query_student_portal")]
    StudentPortal,
    #[serde(rename = "search_website")]
    WebSearch,
}

impl ToolName {
    pub const ALL: [ToolName; 6] = [
        Self::StaticFacts,
        Self::LatestNotices,
        Self::Placements,
        Self::Database,
        Self::StudentPortal,
        Self::WebSearch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StaticFacts => "check_static_facts",
            Self::LatestNotices => "scrape_latest_notices",
            Self::Placements => "scrape_placements",
            Self::Database => "query_database",
            Self::StudentPortal => "query_student_portal",
            Self::WebSearch => "search_website",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tool: {s}"))
    }
}

/// What a tool reads from its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    None,
    Query,
    CredentialsAndQuery,
}

/// How results of a tool are cached by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "tier")]
pub enum CachePolicy {
    /// Permanent, keyed by the normalized query.
    Static,
    /// Expires after `ttl_secs`, keyed by tool name and normalized input.
    Dynamic { ttl_secs: u64 },
    Never,
}

/// Declared contract of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolContract {
    pub name: ToolName,
    pub description: String,
    pub input: InputKind,
    pub cache: CachePolicy,
    pub idempotent: bool,
}

/// Input handed to a tool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolInput {
    pub query: String,
    pub credentials: Option<Credentials>,
}

impl ToolInput {
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Uniform result shape for every tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub payload: Map<String, Value>,
    /// Set by the caching caller, never by the tool.
    #[serde(default)]
    pub cached: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    pub fn ok(payload: Map<String, Value>) -> Self {
        Self {
            success: true,
            payload,
            cached: false,
            error: None,
        }
    }

    /// An unsuccessful result that is not an error, e.g. no matching fact.
    pub fn miss(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            payload: Map::new(),
            cached: false,
            error: Some(reason.into()),
        }
    }

    /// String field of the payload, if present.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.payload.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names_round_trip_through_str() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
        assert!("nope".parse::<ToolName>().is_err());
    }

    #[test]
    fn tool_name_serializes_as_wire_name() {
        let json = serde_json::to_string(&ToolName::StudentPortal).unwrap();
        assert_eq!(json, "\"query_student_portal\"");
    }

    #[test]
    fn miss_is_unsuccessful_with_reason() {
        let r = ToolResult::miss("no fact");
        assert!(!r.success);
        assert!(!r.cached);
        assert_eq!(r.error.as_deref(), Some("no fact"));
    }
}
