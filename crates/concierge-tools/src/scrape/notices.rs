use std::sync::Arc;

use concierge_core::config::{CacheConfig, ToolsConfig};
use concierge_core::errors::ToolError;
use concierge_core::text::truncate_chars;
use concierge_core::traits::{IPageSource, ITool};
use concierge_core::{ToolContract, ToolInput, ToolName, ToolResult};
use serde_json::{json, Map, Value};
use tracing::debug;

use super::blocked::detect_block;
use crate::contracts::contract_for;

/// Shorter lines are menu items and labels, not notices.
const MIN_NOTICE_CHARS: usize = 20;
const MAX_TITLE_CHARS: usize = 200;
const FALLBACK_CHARS: usize = 500;

/// `scrape_latest_notices`.
pub struct NoticesTool {
    source: Arc<dyn IPageSource>,
    path: String,
    max_notices: usize,
    blocked_markers: Vec<String>,
    contract: ToolContract,
}

impl NoticesTool {
    pub fn new(source: Arc<dyn IPageSource>, tools: &ToolsConfig, cache: &CacheConfig) -> Self {
        Self {
            source,
            path: tools.notices_path.clone(),
            max_notices: tools.max_notices,
            blocked_markers: tools.blocked_markers.clone(),
            contract: contract_for(ToolName::LatestNotices, cache),
        }
    }

    fn extract(&self, text: &str) -> Vec<Value> {
        let notices: Vec<Value> = text
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() >= MIN_NOTICE_CHARS)
            .take(self.max_notices)
            .map(|line| json!({ "title": truncate_chars(line, MAX_TITLE_CHARS), "date": "Recent" }))
            .collect();

        if !notices.is_empty() || text.trim().is_empty() {
            return notices;
        }
        vec![json!({
            "title": "Latest information from website",
            "content": truncate_chars(text.trim(), FALLBACK_CHARS),
        })]
    }
}

impl ITool for NoticesTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, _input: &ToolInput) -> Result<ToolResult, ToolError> {
        let text = self.source.fetch_text(&self.path)?;
        detect_block(ToolName::LatestNotices, &text, &self.blocked_markers)?;

        let notices = self.extract(&text);
        debug!(count = notices.len(), "notices extracted");

        let mut payload = Map::new();
        payload.insert("notices".into(), Value::Array(notices));
        Ok(ToolResult::ok(payload))
    }
}
