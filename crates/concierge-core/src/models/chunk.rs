use serde::{Deserialize, Serialize};

pub type ChunkId = String;

/// A unit of indexed website text. Immutable once indexed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    #[serde(default)]
    pub section_label: String,
    #[serde(default)]
    pub source_url: String,
    /// Filled in by the store at index time when absent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedding: Vec<f32>,
}

impl Chunk {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            section_label: String::new(),
            source_url: String::new(),
            embedding: Vec::new(),
        }
    }

    pub fn with_section(mut self, label: impl Into<String>) -> Self {
        self.section_label = label.into();
        self
    }

    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }
}
