use std::sync::Arc;

use concierge_core::config::RetrievalConfig;
use concierge_core::errors::{ConciergeResult, RetrievalError};
use concierge_core::traits::{IEmbeddingProvider, IEvidenceStore};
use concierge_core::Chunk;
use concierge_retrieval::{HashingEmbedder, HybridRetriever, MemoryEvidenceStore, Reranker};

const DIMS: usize = 256;

fn corpus() -> Vec<Chunk> {
    test_fixtures::load_fixture(test_fixtures::COLLEGE_CORPUS)
}

fn retriever_with(embedder: Arc<dyn IEmbeddingProvider>) -> HybridRetriever {
    let store = MemoryEvidenceStore::build(corpus(), &HashingEmbedder::new(DIMS)).unwrap();
    let store: Arc<dyn IEvidenceStore> = Arc::new(store);
    HybridRetriever::new(store, embedder, &RetrievalConfig::default())
}

fn retriever() -> HybridRetriever {
    retriever_with(Arc::new(HashingEmbedder::new(DIMS)))
}

fn ids(docs: &[concierge_core::ScoredDocument]) -> Vec<&str> {
    docs.iter().map(|d| d.chunk.id.as_str()).collect()
}

fn assert_sorted(docs: &[concierge_core::ScoredDocument]) {
    for pair in docs.windows(2) {
        assert!(
            pair[0].fused_score >= pair[1].fused_score,
            "not sorted: {} < {}",
            pair[0].fused_score,
            pair[1].fused_score
        );
    }
}

struct DownEmbedder;
impl IEmbeddingProvider for DownEmbedder {
    fn embed(&self, _text: &str) -> ConciergeResult<Vec<f32>> {
        Err(RetrievalError::EmbeddingFailed {
            provider: "down".into(),
            reason: "model not loaded".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        DIMS
    }
    fn name(&self) -> &str {
        "down"
    }
    fn is_available(&self) -> bool {
        false
    }
}

// --- Person queries ---

#[test]
fn principal_query_surfaces_profile_and_never_navigation() {
    let docs = retriever().search("Who is the principal?", 3).unwrap();
    assert!(docs.len() <= 3);
    assert_sorted(&docs);
    let got = ids(&docs);
    assert!(got.contains(&"principal-profile"), "got {got:?}");
    assert!(!got.contains(&"nav-header"));
    assert_ne!(got[0], "principal-contact");
}

#[test]
fn person_boost_widens_pool_but_not_result() {
    let docs = retriever().search("who is the hod of cse", 2).unwrap();
    assert_eq!(docs.len(), 2);
    assert!(ids(&docs).contains(&"hod-cse"));
}

#[test]
fn titled_chunks_outrank_contact_lines_for_person_queries() {
    let docs = retriever().search("principal contact", 20).unwrap();
    let pos = |id: &str| ids(&docs).iter().position(|d| *d == id);
    let profile = pos("principal-profile").unwrap();
    let contact = pos("principal-contact").unwrap();
    assert!(profile < contact);
}

// --- Non-person queries ---

#[test]
fn non_person_query_has_unadjusted_semantic_scores() {
    let docs = retriever().search("emergency numbers ambulance", 3).unwrap();
    assert!(ids(&docs).contains(&"emergency-contacts"));
    for d in &docs {
        assert!(d.semantic_score >= 0.0 && d.semantic_score <= 1.0);
    }
}

#[test]
fn navigation_menu_excluded_for_every_query() {
    let docs = retriever().search("about vision mission organogram", 20).unwrap();
    assert!(!ids(&docs).contains(&"nav-header"));
}

#[test]
fn abbreviations_reach_full_department_names() {
    let docs = retriever().search("ece labs", 3).unwrap();
    assert!(ids(&docs).contains(&"hod-ece"));
}

// --- Degradation ---

#[test]
fn embedding_failure_degrades_to_keyword_only() {
    let docs = retriever_with(Arc::new(DownEmbedder))
        .search("library timings", 3)
        .unwrap();
    assert!(!docs.is_empty());
    assert_eq!(docs[0].chunk.id, "library");
    assert!(docs.iter().all(|d| d.semantic_score == 0.0));
    assert_sorted(&docs);
}

#[test]
fn empty_query_returns_nothing() {
    assert!(retriever().search("   ", 5).unwrap().is_empty());
    assert!(retriever().search("library", 0).unwrap().is_empty());
}

#[test]
fn repeated_search_is_stable() {
    let r = retriever();
    let a = r.search("hostel facilities", 5).unwrap();
    let b = r.search("hostel facilities", 5).unwrap();
    assert_eq!(ids(&a), ids(&b));
}

// --- Search then rerank ---

#[test]
fn passthrough_rerank_keeps_top_three() {
    let r = retriever();
    let docs = r.search("placement recruiters", 5).unwrap();
    let expected: Vec<String> = docs.iter().take(3).map(|d| d.chunk.id.clone()).collect();
    let reranked = Reranker::passthrough().rerank("placement recruiters", docs, 3);
    let got: Vec<String> = reranked.iter().map(|d| d.chunk.id.clone()).collect();
    assert_eq!(got, expected);
}
