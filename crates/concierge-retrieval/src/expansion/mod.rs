//! Query expansion before retrieval.

mod abbreviations;

pub use abbreviations::{expand_abbreviations, ABBREVIATIONS};
