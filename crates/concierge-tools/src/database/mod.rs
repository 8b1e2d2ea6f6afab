//! `query_database`: aggregate placement statistics.

mod sqlite;

pub use sqlite::{SqliteAggregateStore, StudentRecord};

use std::sync::Arc;

use concierge_core::config::CacheConfig;
use concierge_core::errors::ToolError;
use concierge_core::traits::{IAggregateSource, ITool};
use concierge_core::{ToolContract, ToolInput, ToolName, ToolResult};

use crate::contracts::contract_for;

pub struct DatabaseTool {
    source: Option<Arc<dyn IAggregateSource>>,
    contract: ToolContract,
}

impl DatabaseTool {
    pub fn new(source: Arc<dyn IAggregateSource>, cache: &CacheConfig) -> Self {
        Self {
            source: Some(source),
            contract: contract_for(ToolName::Database, cache),
        }
    }

    /// A database tool with no backing store; every call is `Unavailable`.
    pub fn unconfigured(cache: &CacheConfig) -> Self {
        Self {
            source: None,
            contract: contract_for(ToolName::Database, cache),
        }
    }
}

impl ITool for DatabaseTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, input: &ToolInput) -> Result<ToolResult, ToolError> {
        let source = self.source.as_ref().ok_or_else(|| ToolError::Unavailable {
            tool: ToolName::Database.as_str().into(),
        })?;
        let payload = source.aggregate(&input.query)?;
        Ok(ToolResult::ok(payload))
    }
}
