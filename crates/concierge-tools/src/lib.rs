//! # concierge-tools
//!
//! Every capability the router can dispatch to, behind one [`ITool`] trait.
//!
//! ```text
//! ToolRegistry { ToolName -> Arc<dyn ITool> }
//! ├── check_static_facts    StaticFactsTool  (KnowledgeBase + fact rules)
//! ├── scrape_latest_notices NoticesTool      (IPageSource)
//! ├── scrape_placements     PlacementsTool   (IPageSource, firewall detection)
//! ├── query_database        DatabaseTool     (IAggregateSource, SQLite)
//! ├── query_student_portal  PortalTool       (IPortalClient)
//! └── search_website        SearchTool       (HybridRetriever + Reranker)
//! ```
//!
//! Tools never cache; the caller wraps them according to their contract.
//!
//! [`ITool`]: concierge_core::traits::ITool

pub mod contracts;
pub mod database;
pub mod portal;
pub mod registry;
pub mod scrape;
pub mod search;
pub mod static_facts;

pub use database::{DatabaseTool, SqliteAggregateStore, StudentRecord};
pub use portal::{portal_cache_input, portal_data_for_query, PortalTool, UnconfiguredPortal};
pub use registry::ToolRegistry;
pub use scrape::{HttpPageSource, NoticesTool, PlacementsTool};
pub use search::SearchTool;
pub use static_facts::{KnowledgeBase, StaticFactsTool};
