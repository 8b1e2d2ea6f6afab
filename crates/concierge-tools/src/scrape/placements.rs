use std::sync::Arc;

use concierge_core::config::{CacheConfig, ToolsConfig};
use concierge_core::errors::ToolError;
use concierge_core::text::truncate_chars;
use concierge_core::traits::{IPageSource, ITool};
use concierge_core::{ToolContract, ToolInput, ToolName, ToolResult};
use serde_json::{Map, Value};

use super::blocked::detect_block;
use crate::contracts::contract_for;

const CONTENT_CHARS: usize = 1000;

/// `scrape_placements`. A firewall page yields [`ToolError::Blocked`]; the
/// orchestrator reroutes that to the database tool.
pub struct PlacementsTool {
    source: Arc<dyn IPageSource>,
    path: String,
    blocked_markers: Vec<String>,
    contract: ToolContract,
}

impl PlacementsTool {
    pub fn new(source: Arc<dyn IPageSource>, tools: &ToolsConfig, cache: &CacheConfig) -> Self {
        Self {
            source,
            path: tools.placements_path.clone(),
            blocked_markers: tools.blocked_markers.clone(),
            contract: contract_for(ToolName::Placements, cache),
        }
    }
}

impl ITool for PlacementsTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, _input: &ToolInput) -> Result<ToolResult, ToolError> {
        let text = self.source.fetch_text(&self.path)?;
        detect_block(ToolName::Placements, &text, &self.blocked_markers)?;

        let mut payload = Map::new();
        payload.insert(
            "summary".into(),
            Value::String("Placement information from the college website".into()),
        );
        payload.insert(
            "content".into(),
            Value::String(truncate_chars(text.trim(), CONTENT_CHARS).to_string()),
        );
        Ok(ToolResult::ok(payload))
    }
}
