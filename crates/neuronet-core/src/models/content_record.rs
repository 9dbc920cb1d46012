use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An existing marketplace listing the candidate is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContentRecord {
    pub id: u64,
    pub title: String,
    /// Full listing text (prompt body, dataset description, ...).
    pub content: String,
    /// Logical type, e.g. "prompt", "dataset", "ai_output".
    pub item_type: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl ContentRecord {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        item_type: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            item_type: item_type.into(),
            category: category.into(),
            content_hash: None,
        }
    }

    pub fn with_content_hash(mut self, hash: impl Into<String>) -> Self {
        self.content_hash = Some(hash.into());
        self
    }

    /// blake3 hex digest of a content string.
    pub fn compute_content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

    /// The supplied hash, or the blake3 digest of the content when none was supplied.
    pub fn resolved_content_hash(&self) -> String {
        match &self.content_hash {
            Some(hash) if !hash.is_empty() => hash.clone(),
            _ => Self::compute_content_hash(&self.content),
        }
    }
}
