use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::analysis_report::AnalysisReport;
use super::recommendation::Recommendation;
use crate::constants::{DUPLICATE_THRESHOLD, REASONING_FAIL_OPEN, REASONING_NO_COMPARISON};

/// The existing listing that best matched the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MatchedRecord {
    pub id: u64,
    pub title: String,
    pub content_hash: String,
    /// Blended similarity percentage of this record (0–100).
    pub similarity_score: f64,
}

/// Outcome of comparing a candidate against existing listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SimilarityVerdict {
    /// Best blended similarity percentage (0–100).
    pub similarity_percentage: f64,
    pub is_duplicate: bool,
    pub recommendation: Recommendation,
    pub analysis: AnalysisReport,
    #[serde(rename = "existingItem")]
    pub matched_record: Option<MatchedRecord>,
}

impl SimilarityVerdict {
    /// Build a verdict, deriving the duplicate flag and recommendation from the percentage.
    pub fn new(
        similarity_percentage: f64,
        analysis: AnalysisReport,
        matched_record: Option<MatchedRecord>,
    ) -> Self {
        Self {
            similarity_percentage,
            is_duplicate: similarity_percentage >= DUPLICATE_THRESHOLD,
            recommendation: Recommendation::from_percentage(similarity_percentage),
            analysis,
            matched_record,
        }
    }

    /// Verdict when there is nothing of the same type to compare against.
    pub fn no_comparison() -> Self {
        Self::new(
            0.0,
            AnalysisReport::with_reasoning(REASONING_NO_COMPARISON),
            None,
        )
    }

    /// Accepting verdict used when analysis could not run at all.
    pub fn fail_open() -> Self {
        Self::new(0.0, AnalysisReport::with_reasoning(REASONING_FAIL_OPEN), None)
    }

    /// Round the top-level percentage to two decimals for display.
    ///
    /// The duplicate flag and recommendation are left as classified on the
    /// unrounded value.
    pub fn rounded_for_display(mut self) -> Self {
        self.similarity_percentage = (self.similarity_percentage * 100.0).round() / 100.0;
        self
    }
}
