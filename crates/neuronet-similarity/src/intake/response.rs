use serde::{Deserialize, Serialize};

use neuronet_core::errors::NeuronetResult;
use neuronet_core::models::SimilarityVerdict;

/// Envelope returned by the duplicate-check endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SimilarityVerdict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DuplicateCheckResponse {
    pub fn ok(verdict: SimilarityVerdict) -> Self {
        Self {
            success: true,
            data: Some(verdict),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn to_json(&self) -> NeuronetResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
