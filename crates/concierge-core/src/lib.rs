//! # concierge-core
//!
//! Foundation crate for the campus concierge.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ConciergeConfig;
pub use errors::{ConciergeError, ConciergeResult, ConfigError, ErrorKind, RetrievalError, ToolError};
pub use models::{
    CachePolicy, CacheTier, Chunk, ChunkId, Credentials, InputKind, LoginState, PortalKind,
    ScoredDocument, ToolContract, ToolInput, ToolName, ToolResult,
};
