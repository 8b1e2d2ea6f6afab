//! # concierge-orchestrator
//!
//! Composes cache, retrieval, tools, routing and sessions into one
//! conversational turn.
//!
//! ```text
//! ConciergeService { SessionManager, Arc<QueryOrchestrator> }
//! QueryOrchestrator
//! ├── canned      small talk, empty input, out-of-scope
//! ├── IntentRouter
//! ├── ToolExecutor  TieredCache + ToolRegistry + per-tool timeouts
//! ├── formatting  raw per-tool answers
//! └── ILanguageModel (optional)  friendly rewrite of long answers
//! ```

pub mod answer;
pub mod builder;
pub mod canned;
pub mod executor;
pub mod formatting;
pub mod llm;
pub mod orchestrator;
pub mod service;

pub use answer::{Answer, TurnStage};
pub use builder::ConciergeBuilder;
pub use executor::ToolExecutor;
pub use llm::OllamaClient;
pub use orchestrator::QueryOrchestrator;
pub use service::ConciergeService;
