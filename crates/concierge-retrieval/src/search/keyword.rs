//! Keyword-side candidates.

use std::collections::HashMap;

use concierge_core::errors::ConciergeResult;
use concierge_core::text::tokens;
use concierge_core::traits::IEvidenceStore;
use concierge_core::ChunkId;

use crate::ranking::fusion::Candidate;
use crate::ranking::priority::{has_title, is_navigation_artifact};

/// Chunks with positive keyword overlap. Titled chunks count double for
/// person queries.
pub fn search(
    store: &dyn IEvidenceStore,
    expanded_query: &str,
    person: bool,
) -> ConciergeResult<HashMap<ChunkId, Candidate>> {
    let terms = tokens(expanded_query);
    if terms.is_empty() {
        return Ok(HashMap::new());
    }

    let mut out = HashMap::new();
    for (id, score) in store.keyword_scores(&terms)? {
        if score <= 0.0 {
            continue;
        }
        let Some(chunk) = store.chunk(&id) else { continue };
        if is_navigation_artifact(&chunk.text) {
            continue;
        }
        let score = if person && has_title(&chunk.text) {
            score * 2.0
        } else {
            score
        };
        out.insert(
            id,
            Candidate {
                chunk,
                semantic_score: 0.0,
                keyword_score: score,
            },
        );
    }
    Ok(out)
}
