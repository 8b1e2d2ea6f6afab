//! `search_website`: hybrid retrieval over the indexed site, then rerank.

use std::sync::Arc;

use concierge_core::config::{CacheConfig, RetrievalConfig};
use concierge_core::errors::ToolError;
use concierge_core::traits::ITool;
use concierge_core::{ScoredDocument, ToolContract, ToolInput, ToolName, ToolResult};
use concierge_retrieval::{HybridRetriever, Reranker};
use serde_json::{json, Map, Value};
use tracing::debug;

pub struct SearchTool {
    retriever: Arc<HybridRetriever>,
    reranker: Reranker,
    k: usize,
    top_k: usize,
    contract: ToolContract,
}

impl SearchTool {
    pub fn new(
        retriever: Arc<HybridRetriever>,
        reranker: Reranker,
        retrieval: &RetrievalConfig,
        cache: &CacheConfig,
    ) -> Self {
        Self {
            retriever,
            reranker,
            k: retrieval.k,
            top_k: retrieval.rerank_top_k,
            contract: crate::contracts::contract_for(ToolName::WebSearch, cache),
        }
    }
}

fn document_json(doc: &ScoredDocument) -> Value {
    json!({
        "id": doc.chunk.id,
        "text": doc.chunk.text,
        "section": doc.chunk.section_label,
        "source_url": doc.chunk.source_url,
        "semantic_score": doc.semantic_score,
        "keyword_score": doc.keyword_score,
        "fused_score": doc.fused_score,
    })
}

impl ITool for SearchTool {
    fn contract(&self) -> &ToolContract {
        &self.contract
    }

    fn call(&self, input: &ToolInput) -> Result<ToolResult, ToolError> {
        if input.query.trim().is_empty() {
            return Err(ToolError::InvalidInput {
                reason: "empty search query".into(),
            });
        }

        let _span = concierge_observability::retrieval_span!(input.query, self.k).entered();
        let retrieved = self
            .retriever
            .search(&input.query, self.k)
            .map_err(|e| ToolError::failed(ToolName::WebSearch.as_str(), e.to_string()))?;
        let docs = self.reranker.rerank(&input.query, retrieved, self.top_k);
        debug!(documents = docs.len(), reranked = self.reranker.has_model(), "search complete");

        if docs.is_empty() {
            return Ok(ToolResult::miss("no matching documents"));
        }

        let mut payload = Map::new();
        payload.insert("query".into(), json!(input.query));
        payload.insert(
            "documents".into(),
            Value::Array(docs.iter().map(document_json).collect()),
        );
        Ok(ToolResult::ok(payload))
    }
}
