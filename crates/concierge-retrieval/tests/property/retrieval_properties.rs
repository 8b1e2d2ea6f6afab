use std::sync::Arc;

use concierge_core::config::RetrievalConfig;
use concierge_core::traits::IEvidenceStore;
use concierge_core::Chunk;
use concierge_retrieval::{FusionWeights, HashingEmbedder, HybridRetriever, MemoryEvidenceStore};
use proptest::prelude::*;

const VOCAB: &[&str] = &[
    "principal", "dr.", "head", "department", "library", "fees", "hostel", "placement",
    "contact", "emergency", "|", "dean", "cse", "ece", "who", "timings", "campus",
];

fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(VOCAB), 1..12).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn search_returns_at_most_k_sorted(
        texts in proptest::collection::vec(text_strategy(), 1..25),
        query in text_strategy(),
        k in 1usize..10,
    ) {
        let chunks: Vec<Chunk> = texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Chunk::new(format!("c{i}"), t))
            .collect();
        let store = MemoryEvidenceStore::build(chunks, &HashingEmbedder::new(32)).unwrap();
        let store: Arc<dyn IEvidenceStore> = Arc::new(store);
        let retriever = HybridRetriever::new(
            store,
            Arc::new(HashingEmbedder::new(32)),
            &RetrievalConfig::default(),
        );

        let docs = retriever.search(&query, k).unwrap();
        prop_assert!(docs.len() <= k);
        for pair in docs.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[test]
    fn fusion_monotonic_in_semantic(a in -3.0f64..3.0, b in -3.0f64..3.0, kw in 0.0f64..50.0) {
        let w = FusionWeights::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(w.fused_score(lo, kw) <= w.fused_score(hi, kw));
    }

    #[test]
    fn fusion_monotonic_in_keyword(s in -3.0f64..3.0, a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let w = FusionWeights::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(w.fused_score(s, lo) <= w.fused_score(s, hi));
    }
}
