use crate::errors::NeuronetResult;
use crate::models::{ContentRecord, SimilarityVerdict};

/// Decides whether new marketplace content duplicates existing listings.
pub trait IDuplicateDetector: Send + Sync {
    /// Compare `candidate` against `existing` listings of `item_type`.
    fn analyze(
        &self,
        candidate: &str,
        item_type: &str,
        existing: &[ContentRecord],
    ) -> NeuronetResult<SimilarityVerdict>;

    /// Human-readable detector name.
    fn name(&self) -> &str;
}
