use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{PortalKind, ToolName};

/// Tool endpoints, timeouts, and data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub base_url: String,
    pub notices_path: String,
    pub placements_path: String,
    pub scrape_timeout_ms: u64,
    pub database_timeout_ms: u64,
    pub portal_timeout_ms: u64,
    pub search_timeout_ms: u64,
    pub static_timeout_ms: u64,
    /// Page text containing any of these means a firewall answered instead of the site.
    pub blocked_markers: Vec<String>,
    pub max_notices: usize,
    pub default_portal: PortalKind,
    /// SQLite file with placement records. Database tool is unavailable without it.
    pub database_path: Option<String>,
    /// TOML override for the built-in knowledge base.
    pub knowledge_base_path: Option<String>,
}

impl ToolsConfig {
    /// Timeout applied to one call of `tool`.
    pub fn timeout_ms(&self, tool: ToolName) -> u64 {
        match tool {
            ToolName::StaticFacts => self.static_timeout_ms,
            ToolName::LatestNotices | ToolName::Placements => self.scrape_timeout_ms,
            ToolName::Database => self.database_timeout_ms,
            ToolName::StudentPortal => self.portal_timeout_ms,
            ToolName::WebSearch => self.search_timeout_ms,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            notices_path: defaults::DEFAULT_NOTICES_PATH.to_string(),
            placements_path: defaults::DEFAULT_PLACEMENTS_PATH.to_string(),
            scrape_timeout_ms: defaults::DEFAULT_SCRAPE_TIMEOUT_MS,
            database_timeout_ms: defaults::DEFAULT_DATABASE_TIMEOUT_MS,
            portal_timeout_ms: defaults::DEFAULT_PORTAL_TIMEOUT_MS,
            search_timeout_ms: defaults::DEFAULT_SEARCH_TIMEOUT_MS,
            static_timeout_ms: defaults::DEFAULT_STATIC_TIMEOUT_MS,
            blocked_markers: defaults::DEFAULT_BLOCKED_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_notices: defaults::DEFAULT_MAX_NOTICES,
            default_portal: PortalKind::default(),
            database_path: None,
            knowledge_base_path: None,
        }
    }
}
