use std::sync::Arc;

use concierge_core::config::{CacheConfig, RetrievalConfig};
use concierge_core::errors::ToolError;
use concierge_core::traits::{IEvidenceStore, ITool};
use concierge_core::{Chunk, ToolInput, ToolName};
use concierge_retrieval::{HashingEmbedder, HybridRetriever, MemoryEvidenceStore, Reranker};
use concierge_tools::{KnowledgeBase, SearchTool, StaticFactsTool, ToolRegistry};

fn search_tool() -> SearchTool {
    let chunks: Vec<Chunk> = test_fixtures::load_fixture(test_fixtures::COLLEGE_CORPUS);
    let config = RetrievalConfig::default();
    let embedder = Arc::new(HashingEmbedder::new(config.embedding_dimensions));
    let store: Arc<dyn IEvidenceStore> =
        Arc::new(MemoryEvidenceStore::build(chunks, embedder.as_ref()).unwrap());
    let retriever = Arc::new(HybridRetriever::new(store, embedder, &config));
    SearchTool::new(retriever, Reranker::passthrough(), &config, &CacheConfig::default())
}

#[test]
fn knowledge_override_changes_answers() {
    let path = test_fixtures::fixture_path(test_fixtures::KNOWLEDGE_OVERRIDE);
    let kb = KnowledgeBase::from_file(path).unwrap();
    let tool = StaticFactsTool::new(kb, &CacheConfig::default());

    let principal = tool.call(&ToolInput::query("who is the principal?")).unwrap();
    assert_eq!(
        principal.text("answer"),
        Some("The Principal of TKRCET is Dr. Test Principal.")
    );

    let timings = tool.call(&ToolInput::query("college timings")).unwrap();
    assert!(timings.text("answer").unwrap().contains("9:00 AM to 4:00 PM"));
    // Untouched fields keep their defaults.
    assert!(timings.text("answer").unwrap().contains("12:40 PM to 1:20 PM"));
}

#[test]
fn search_returns_reranked_top_three() {
    let result = search_tool()
        .call(&ToolInput::query("hostel facilities for girls"))
        .unwrap();
    assert!(result.success);
    let docs = result.payload["documents"].as_array().unwrap();
    assert!(!docs.is_empty() && docs.len() <= 3);
    assert_eq!(docs[0]["id"], "hostel");
    assert_eq!(result.text("query"), Some("hostel facilities for girls"));
}

#[test]
fn search_rejects_blank_query() {
    let err = search_tool().call(&ToolInput::query("   ")).unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput { .. }));
}

#[test]
fn registry_holds_one_tool_per_name() {
    let registry = ToolRegistry::new()
        .with(Arc::new(StaticFactsTool::new(
            KnowledgeBase::default(),
            &CacheConfig::default(),
        )))
        .with(Arc::new(search_tool()));
    assert_eq!(registry.names(), vec![ToolName::StaticFacts, ToolName::WebSearch]);
    assert_eq!(registry.len(), 2);
}
