// Single source of truth for all default values.

use crate::constants;

// --- Retrieval ---
pub const DEFAULT_SEARCH_K: usize = constants::SEARCH_K;
pub const DEFAULT_RERANK_TOP_K: usize = constants::RERANK_TOP_K;
pub const DEFAULT_PERSON_K_BOOST: usize = constants::PERSON_QUERY_K_BOOST;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = constants::SEMANTIC_WEIGHT;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = constants::KEYWORD_WEIGHT;
pub const DEFAULT_KEYWORD_NORMALIZER: f64 = constants::KEYWORD_NORMALIZER;
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 1_000;

// --- Cache ---
pub const DEFAULT_NOTICES_TTL_SECS: u64 = constants::NOTICES_TTL_SECS;
pub const DEFAULT_PLACEMENTS_TTL_SECS: u64 = constants::PLACEMENTS_TTL_SECS;
pub const DEFAULT_DATABASE_TTL_SECS: u64 = constants::DATABASE_TTL_SECS;
pub const DEFAULT_SEARCH_TTL_SECS: u64 = constants::SEARCH_TTL_SECS;
pub const DEFAULT_PORTAL_TTL_SECS: u64 = constants::PORTAL_TTL_SECS;

// --- Tools ---
pub const DEFAULT_BASE_URL: &str = "https://tkrcet.ac.in";
pub const DEFAULT_NOTICES_PATH: &str = "/notifications";
pub const DEFAULT_PLACEMENTS_PATH: &str = "/placements";
pub const DEFAULT_SCRAPE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_DATABASE_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_PORTAL_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_SEARCH_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_STATIC_TIMEOUT_MS: u64 = 1_000;
pub const DEFAULT_BLOCKED_MARKERS: &[&str] = &["MalCare", "Firewall", "Blocked"];
pub const DEFAULT_MAX_NOTICES: usize = 5;

// --- Session ---
pub const DEFAULT_HISTORY_LEN: usize = constants::HISTORY_LEN;
pub const DEFAULT_SESSION_INACTIVITY_SECS: i64 = 1_800; // 30 minutes

// --- Generation ---
pub const DEFAULT_LLM_ENABLED: bool = false;
pub const DEFAULT_LLM_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_LLM_MODEL: &str = "gemma2:2b";
pub const DEFAULT_LLM_TIMEOUT_MS: u64 = 30_000;
/// Static answers shorter than this are sent to the user verbatim.
pub const DEFAULT_LLM_MIN_CHARS: usize = 150;
pub const DEFAULT_NORMALIZER_TIMEOUT_MS: u64 = 3_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
