//! Query embedding: the fallback provider and the per-query memo.

mod cache;
mod hashing;

pub use cache::QueryEmbeddingCache;
pub use hashing::HashingEmbedder;
