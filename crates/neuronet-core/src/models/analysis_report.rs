use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Human-readable explanation of a similarity verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalysisReport {
    pub similarities: Vec<String>,
    pub differences: Vec<String>,
    /// Unique terms from both texts, candidate terms first.
    pub key_concepts: Vec<String>,
    pub reasoning: String,
}

impl AnalysisReport {
    /// A report with no findings and only a reasoning line.
    pub fn with_reasoning(reasoning: impl Into<String>) -> Self {
        Self {
            reasoning: reasoning.into(),
            ..Default::default()
        }
    }
}
