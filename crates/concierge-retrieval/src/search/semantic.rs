//! Vector-side candidates.

use concierge_core::errors::ConciergeResult;
use concierge_core::traits::IEvidenceStore;

use crate::ranking::fusion::Candidate;
use crate::ranking::priority::{is_navigation_artifact, person_adjustment};

/// Nearest neighbours as candidates with `1 / (1 + distance)` scores, in
/// neighbour order. Person queries add the priority adjustment.
pub fn search(
    store: &dyn IEvidenceStore,
    vector: &[f32],
    pool: usize,
    person: bool,
) -> ConciergeResult<Vec<Candidate>> {
    let neighbours = store.nearest_neighbors(vector, pool)?;
    Ok(neighbours
        .into_iter()
        .filter_map(|(id, distance)| {
            let chunk = store.chunk(&id)?;
            if is_navigation_artifact(&chunk.text) {
                return None;
            }
            let mut score = 1.0 / (1.0 + distance);
            if person {
                score += person_adjustment(&chunk.text);
            }
            Some(Candidate {
                chunk,
                semantic_score: score,
                keyword_score: 0.0,
            })
        })
        .collect())
}
