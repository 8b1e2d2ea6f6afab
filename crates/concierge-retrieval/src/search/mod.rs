//! HybridRetriever: semantic + keyword candidates, person-aware adjustment,
//! weighted fusion.

mod keyword;
mod semantic;

use std::sync::Arc;

use concierge_core::config::RetrievalConfig;
use concierge_core::errors::ConciergeResult;
use concierge_core::traits::{IEmbeddingProvider, IEvidenceStore};
use concierge_core::ScoredDocument;
use tracing::{debug, warn};

use crate::embedding::QueryEmbeddingCache;
use crate::expansion::expand_abbreviations;
use crate::intent::is_person_query;
use crate::ranking::fusion::{self, Candidate, FusionWeights};

pub struct HybridRetriever {
    store: Arc<dyn IEvidenceStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    embeddings: QueryEmbeddingCache,
    weights: FusionWeights,
    person_k_boost: usize,
}

impl HybridRetriever {
    pub fn new(
        store: Arc<dyn IEvidenceStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: &RetrievalConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            embeddings: QueryEmbeddingCache::new(config.embedding_cache_size),
            weights: FusionWeights::from(config),
            person_k_boost: config.person_k_boost,
        }
    }

    pub fn store(&self) -> &Arc<dyn IEvidenceStore> {
        &self.store
    }

    /// Rank the corpus for `query` and return at most `k` documents, sorted by
    /// non-increasing fused score.
    ///
    /// Person queries pull `k + person_k_boost` semantic candidates so titled
    /// chunks can surface, but the result is still capped at `k`. If the
    /// query cannot be embedded the search runs on keywords alone.
    pub fn search(&self, query: &str, k: usize) -> ConciergeResult<Vec<ScoredDocument>> {
        if query.trim().is_empty() || k == 0 || self.store.is_empty() {
            return Ok(Vec::new());
        }

        let expanded = expand_abbreviations(query);
        let person = is_person_query(query);
        let pool = if person {
            (k + self.person_k_boost).min(self.store.len())
        } else {
            k.min(self.store.len())
        };

        let semantic = match self.embed(&expanded) {
            Ok(vector) => semantic::search(self.store.as_ref(), &vector, pool, person)?,
            Err(e) => {
                warn!(
                    provider = self.embedder.name(),
                    error = %e,
                    "query embedding failed, falling back to keyword-only search"
                );
                Vec::new()
            }
        };
        let mut keyword = keyword::search(self.store.as_ref(), &expanded, person)?;

        // Semantic candidates first in neighbour order; fused-score ties keep it.
        let mut candidates: Vec<Candidate> = semantic
            .into_iter()
            .map(|mut c| {
                if let Some(kw) = keyword.remove(&c.chunk.id) {
                    c.keyword_score = kw.keyword_score;
                }
                c
            })
            .collect();

        let mut keyword_only: Vec<Candidate> = keyword.into_values().collect();
        keyword_only.sort_by(|a, b| {
            b.keyword_score
                .partial_cmp(&a.keyword_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.chunk.id.cmp(&b.chunk.id))
        });
        candidates.extend(keyword_only);

        let mut ranked = fusion::fuse(candidates, &self.weights);
        ranked.truncate(k);

        debug!(
            query,
            person,
            pool,
            returned = ranked.len(),
            "hybrid search complete"
        );
        Ok(ranked)
    }

    fn embed(&self, text: &str) -> ConciergeResult<Arc<Vec<f32>>> {
        if let Some(hit) = self.embeddings.get(text) {
            return Ok(hit);
        }
        let vector = self.embedder.embed(text)?;
        Ok(self.embeddings.insert(text, vector))
    }
}
