/// Concierge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Dynamic cache lifetimes (seconds) ---

/// Notices change a few times a day at most.
pub const NOTICES_TTL_SECS: u64 = 3_600;
pub const PLACEMENTS_TTL_SECS: u64 = 3_600;
pub const DATABASE_TTL_SECS: u64 = 3_600;
pub const SEARCH_TTL_SECS: u64 = 3_600;
/// Portal data is personal and short-lived.
pub const PORTAL_TTL_SECS: u64 = 300;

// --- Retrieval ---

/// Extra candidates pulled from the vector index for person-seeking queries.
pub const PERSON_QUERY_K_BOOST: usize = 15;
pub const SEMANTIC_WEIGHT: f64 = 0.6;
pub const KEYWORD_WEIGHT: f64 = 0.4;
/// Raw keyword scores are divided by this and capped at 1.0 before fusion.
pub const KEYWORD_NORMALIZER: f64 = 10.0;
pub const SEARCH_K: usize = 5;
pub const RERANK_TOP_K: usize = 3;

// --- Session ---

pub const HISTORY_LEN: usize = 3;

/// Query issued on the user's behalf once login credentials are complete.
pub const POST_LOGIN_QUERY: &str = "my results";

/// Input used for the database fallback when the placements page is blocked.
pub const PLACEMENT_FALLBACK_QUERY: &str = "placement statistics";
