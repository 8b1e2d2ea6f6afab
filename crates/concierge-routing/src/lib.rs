//! # concierge-routing
//!
//! Maps a query to exactly one tool. The rule table is plain data evaluated in
//! priority order; the first match wins and the final rule always matches.
//!
//! ```text
//! login active?          → CollectCredential
//! freshness keywords     → scrape_latest_notices
//! personal-data keywords → query_student_portal
//! aggregate keywords     → query_database
//! placement keywords     → scrape_placements
//! anything else          → check_static_facts, falling back to search_website
//! ```

pub mod keywords;
pub mod predicate;
pub mod router;
pub mod rules;

pub use predicate::RulePredicate;
pub use router::{IntentRouter, RouteDecision};
pub use rules::{default_rules, RoutingRule};
