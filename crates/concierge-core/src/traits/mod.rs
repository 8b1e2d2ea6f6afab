mod embedding;
mod evidence_store;
mod language;
mod relevance;
mod sources;
mod tool;

pub use embedding::IEmbeddingProvider;
pub use evidence_store::IEvidenceStore;
pub use language::{ILanguageModel, ILanguageNormalizer};
pub use relevance::IRelevanceModel;
pub use sources::{IAggregateSource, IPageSource, IPortalClient, PortalData};
pub use tool::ITool;
