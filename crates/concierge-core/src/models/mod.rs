mod cache_tier;
mod chunk;
mod credentials;
mod login_state;
mod scored_document;
mod tool;

pub use cache_tier::CacheTier;
pub use chunk::{Chunk, ChunkId};
pub use credentials::{Credentials, PortalKind};
pub use login_state::LoginState;
pub use scored_document::ScoredDocument;
pub use tool::{CachePolicy, InputKind, ToolContract, ToolInput, ToolName, ToolResult};
