use std::collections::HashMap;
use std::sync::Arc;

use concierge_core::traits::ITool;
use concierge_core::{ToolContract, ToolName};
use tracing::debug;

/// Name → tool lookup.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<ToolName, Arc<dyn ITool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under the name in its contract, replacing any previous one.
    pub fn register(&mut self, tool: Arc<dyn ITool>) {
        let name = tool.contract().name;
        debug!(tool = %name, "tool registered");
        self.tools.insert(name, tool);
    }

    pub fn with(mut self, tool: Arc<dyn ITool>) -> Self {
        self.register(tool);
        self
    }

    pub fn get(&self, name: ToolName) -> Option<Arc<dyn ITool>> {
        self.tools.get(&name).cloned()
    }

    pub fn contract(&self, name: ToolName) -> Option<&ToolContract> {
        self.tools.get(&name).map(|t| t.contract())
    }

    pub fn contains(&self, name: ToolName) -> bool {
        self.tools.contains_key(&name)
    }

    /// Registered names in a stable order.
    pub fn names(&self) -> Vec<ToolName> {
        let mut names: Vec<ToolName> = self.tools.keys().copied().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
