mod concierge_error;
mod config_error;
mod error_kind;
mod retrieval_error;
mod tool_error;

pub use concierge_error::{ConciergeError, ConciergeResult};
pub use config_error::ConfigError;
pub use error_kind::ErrorKind;
pub use retrieval_error::RetrievalError;
pub use tool_error::ToolError;
