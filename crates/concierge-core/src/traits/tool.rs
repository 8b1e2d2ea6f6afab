use crate::errors::ToolError;
use crate::models::{ToolContract, ToolInput, ToolResult};

/// A named capability the router can dispatch to.
///
/// Calls are synchronous and may block on I/O; the orchestrator runs them on
/// the blocking pool under a timeout.
pub trait ITool: Send + Sync {
    fn contract(&self) -> &ToolContract;

    fn call(&self, input: &ToolInput) -> Result<ToolResult, ToolError>;
}
