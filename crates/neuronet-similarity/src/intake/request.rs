use serde::{Deserialize, Serialize};

use neuronet_core::errors::{NeuronetError, NeuronetResult};

const MISSING_FIELDS: &str = "Missing required fields: newContent, itemType";

/// Body of a duplicate-check request. Fields are optional so that a missing
/// field is a validation error rather than a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckRequest {
    #[serde(default)]
    pub new_content: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
}

impl DuplicateCheckRequest {
    pub fn new(new_content: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            new_content: Some(new_content.into()),
            item_type: Some(item_type.into()),
        }
    }

    /// Parse a JSON body. Malformed JSON is a `SerializationError`.
    pub fn from_json(body: &str) -> NeuronetResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Both fields, or `InvalidArgument` when either is missing, null, or empty.
    pub fn validate(&self) -> NeuronetResult<(&str, &str)> {
        match (self.new_content.as_deref(), self.item_type.as_deref()) {
            (Some(content), Some(item_type)) if !content.is_empty() && !item_type.is_empty() => {
                Ok((content, item_type))
            }
            _ => Err(NeuronetError::invalid_argument(MISSING_FIELDS)),
        }
    }
}
