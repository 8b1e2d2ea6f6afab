//! Wires every component from a [`ConciergeConfig`].
//!
//! Collaborators left unset fall back to the configured defaults: the
//! knowledge base file or built-in facts, the corpus file or an empty index,
//! SQLite when a database path is set, the live website for scraping, and no
//! portal access. Build outside of an async context: the HTTP clients are
//! blocking.

use std::sync::Arc;

use concierge_cache::{Clock, TieredCache};
use concierge_core::config::ConciergeConfig;
use concierge_core::errors::ConciergeResult;
use concierge_core::traits::{
    IAggregateSource, IEmbeddingProvider, ILanguageModel, ILanguageNormalizer, IPageSource,
    IPortalClient, IRelevanceModel,
};
use concierge_core::{Chunk, PortalKind};
use concierge_observability::QueryMetrics;
use concierge_retrieval::store::load_chunks;
use concierge_retrieval::{HashingEmbedder, HybridRetriever, MemoryEvidenceStore, Reranker};
use concierge_routing::{IntentRouter, RoutingRule};
use concierge_tools::{
    DatabaseTool, HttpPageSource, KnowledgeBase, NoticesTool, PlacementsTool, PortalTool,
    SearchTool, SqliteAggregateStore, StaticFactsTool, ToolRegistry,
};
use tracing::{info, warn};

use crate::executor::ToolExecutor;
use crate::llm::OllamaClient;
use crate::orchestrator::QueryOrchestrator;
use crate::service::ConciergeService;

#[derive(Default)]
pub struct ConciergeBuilder {
    config: ConciergeConfig,
    knowledge: Option<KnowledgeBase>,
    chunks: Option<Vec<Chunk>>,
    page_source: Option<Arc<dyn IPageSource>>,
    aggregate_source: Option<Arc<dyn IAggregateSource>>,
    portal_clients: Vec<(PortalKind, Arc<dyn IPortalClient>)>,
    embedder: Option<Arc<dyn IEmbeddingProvider>>,
    relevance: Option<Arc<dyn IRelevanceModel>>,
    language_model: Option<Arc<dyn ILanguageModel>>,
    normalizer: Option<Arc<dyn ILanguageNormalizer>>,
    clock: Option<Arc<dyn Clock>>,
    rules: Option<Vec<RoutingRule>>,
}

impl ConciergeBuilder {
    pub fn new(config: ConciergeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ConciergeConfig {
        &self.config
    }

    pub fn knowledge(mut self, kb: KnowledgeBase) -> Self {
        self.knowledge = Some(kb);
        self
    }

    pub fn chunks(mut self, chunks: Vec<Chunk>) -> Self {
        self.chunks = Some(chunks);
        self
    }

    pub fn page_source(mut self, source: Arc<dyn IPageSource>) -> Self {
        self.page_source = Some(source);
        self
    }

    pub fn aggregate_source(mut self, source: Arc<dyn IAggregateSource>) -> Self {
        self.aggregate_source = Some(source);
        self
    }

    pub fn portal_client(mut self, kind: PortalKind, client: Arc<dyn IPortalClient>) -> Self {
        self.portal_clients.push((kind, client));
        self
    }

    pub fn embedder(mut self, embedder: Arc<dyn IEmbeddingProvider>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn relevance_model(mut self, model: Arc<dyn IRelevanceModel>) -> Self {
        self.relevance = Some(model);
        self
    }

    pub fn language_model(mut self, model: Arc<dyn ILanguageModel>) -> Self {
        self.language_model = Some(model);
        self
    }

    pub fn normalizer(mut self, normalizer: Arc<dyn ILanguageNormalizer>) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn rules(mut self, rules: Vec<RoutingRule>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn build(self) -> ConciergeResult<QueryOrchestrator> {
        let config = self.config;

        // Static facts
        let knowledge = match self.knowledge {
            Some(kb) => kb,
            None => match &config.tools.knowledge_base_path {
                Some(path) => KnowledgeBase::from_file(path)?,
                None => KnowledgeBase::default(),
            },
        };

        // Retrieval
        let chunks = match self.chunks {
            Some(chunks) => chunks,
            None => match &config.retrieval.corpus_path {
                Some(path) => load_chunks(path)?,
                None => Vec::new(),
            },
        };
        if chunks.is_empty() {
            warn!("no corpus loaded, free-text search will find nothing");
        }
        let embedder: Arc<dyn IEmbeddingProvider> = match self.embedder {
            Some(embedder) => embedder,
            None => Arc::new(HashingEmbedder::new(config.retrieval.embedding_dimensions)),
        };
        let store = Arc::new(MemoryEvidenceStore::build(chunks, embedder.as_ref())?);
        let retriever = Arc::new(HybridRetriever::new(store, embedder, &config.retrieval));
        let reranker = Reranker::new(self.relevance);

        // Scraping
        let page_source: Arc<dyn IPageSource> = match self.page_source {
            Some(source) => source,
            None => Arc::new(HttpPageSource::from_config(&config.tools)?),
        };

        // Aggregates
        let database = match self.aggregate_source {
            Some(source) => DatabaseTool::new(source, &config.cache),
            None => match &config.tools.database_path {
                Some(path) => DatabaseTool::new(Arc::new(SqliteAggregateStore::open(path)?), &config.cache),
                None => DatabaseTool::unconfigured(&config.cache),
            },
        };

        // Portal
        let portal = self
            .portal_clients
            .into_iter()
            .fold(PortalTool::new(&config.cache), |tool, (kind, client)| {
                tool.with_client(kind, client)
            });

        let registry = ToolRegistry::new()
            .with(Arc::new(StaticFactsTool::new(knowledge, &config.cache)))
            .with(Arc::new(NoticesTool::new(
                Arc::clone(&page_source),
                &config.tools,
                &config.cache,
            )))
            .with(Arc::new(PlacementsTool::new(page_source, &config.tools, &config.cache)))
            .with(Arc::new(database))
            .with(Arc::new(portal))
            .with(Arc::new(SearchTool::new(
                retriever,
                reranker,
                &config.retrieval,
                &config.cache,
            )));

        let cache = Arc::new(match self.clock {
            Some(clock) => TieredCache::with_clock(clock),
            None => TieredCache::new(),
        });
        let tools = registry.len();
        let executor = ToolExecutor::new(
            registry,
            cache,
            Arc::new(QueryMetrics::new()),
            config.tools.clone(),
        );
        let router = match self.rules {
            Some(rules) => IntentRouter::with_rules(rules),
            None => IntentRouter::new(),
        };

        // Generation
        let language_model = match self.language_model {
            Some(model) => Some(model),
            None if config.generation.llm_enabled => {
                let client = OllamaClient::from_config(&config.generation)?;
                client.health_check();
                Some(Arc::new(client) as Arc<dyn ILanguageModel>)
            }
            None => None,
        };

        let mut orchestrator = QueryOrchestrator::new(executor, router, &config);
        if let Some(model) = language_model {
            info!(model = model.name(), available = model.is_available(), "language model attached");
            orchestrator = orchestrator.with_language_model(model);
        }
        if let Some(normalizer) = self.normalizer {
            orchestrator = orchestrator.with_normalizer(normalizer);
        }

        info!(tools, "concierge ready");
        Ok(orchestrator)
    }

    pub fn build_service(self) -> ConciergeResult<ConciergeService> {
        let session = self.config.session.clone();
        let orchestrator = self.build()?;
        Ok(ConciergeService::new(Arc::new(orchestrator), &session))
    }
}
