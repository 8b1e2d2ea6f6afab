//! # concierge-retrieval
//!
//! Free-text search over the indexed website corpus.
//!
//! ## Architecture
//!
//! ```text
//! HybridRetriever
//! ├── QueryExpansion (abbreviation table)
//! ├── PersonHeuristic (widens the candidate pool)
//! ├── Semantic search (IEvidenceStore::nearest_neighbors, 1/(1+d))
//! │   └── QueryEmbeddingCache (moka, blake3 keys)
//! ├── Keyword search (IEvidenceStore::keyword_scores, BM25)
//! ├── Priority (title boosts, contact penalties, navigation filter)
//! └── Fusion (0.6 semantic + 0.4 min(keyword/10, 1), stable order)
//! Reranker (IRelevanceModel, passthrough when absent)
//! MemoryEvidenceStore (brute-force L2 + BM25 Okapi)
//! HashingEmbedder (always-available fallback provider)
//! ```

pub mod embedding;
pub mod expansion;
pub mod intent;
pub mod ranking;
pub mod search;
pub mod store;

pub use embedding::{HashingEmbedder, QueryEmbeddingCache};
pub use ranking::fusion::FusionWeights;
pub use ranking::reranker::Reranker;
pub use search::HybridRetriever;
pub use store::MemoryEvidenceStore;
