//! Scoring and ordering of retrieved chunks.

pub mod fusion;
pub mod priority;
pub mod reranker;
