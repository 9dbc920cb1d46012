//! Intake boundary of the duplicate-check endpoint, without any transport.
//!
//! Validates the request, drops unusable stored records, runs a detector, and
//! fails open when analysis breaks.

pub mod request;
pub mod response;

use neuronet_core::constants::RETRIEVAL_ERROR_MARKER;
use neuronet_core::errors::NeuronetError;
use neuronet_core::models::{ContentRecord, SimilarityVerdict};
use neuronet_core::traits::IDuplicateDetector;
use neuronet_observability::duplicate_check_span;
use neuronet_observability::tracing_setup::events;
use tracing::debug;

pub use request::DuplicateCheckRequest;
pub use response::DuplicateCheckResponse;

/// Records of `item_type` whose content was actually retrieved.
///
/// Empty content and content carrying the storage layer's retrieval-error
/// marker are dropped.
pub fn retrievable_records(records: &[ContentRecord], item_type: &str) -> Vec<ContentRecord> {
    records
        .iter()
        .filter(|r| r.item_type == item_type)
        .filter(|r| !r.content.is_empty() && !r.content.contains(RETRIEVAL_ERROR_MARKER))
        .cloned()
        .collect()
}

/// Answer one duplicate-check request.
///
/// Missing fields produce `success = false`. Any detector error produces the
/// accepting fallback verdict with `success = true`.
pub fn check_duplicate(
    detector: &dyn IDuplicateDetector,
    request: &DuplicateCheckRequest,
    records: &[ContentRecord],
) -> DuplicateCheckResponse {
    let span = duplicate_check_span!(detector.name());
    let _guard = span.enter();

    let (content, item_type) = match request.validate() {
        Ok(fields) => fields,
        Err(err) => {
            let message = match err {
                NeuronetError::InvalidArgument { reason } => reason,
                other => other.to_string(),
            };
            events::request_rejected(&message);
            return DuplicateCheckResponse::rejected(message);
        }
    };

    let comparable = retrievable_records(records, item_type);
    debug!(
        stored = records.len(),
        comparable = comparable.len(),
        "filtered stored records"
    );

    match detector.analyze(content, item_type, &comparable) {
        Ok(verdict) => DuplicateCheckResponse::ok(verdict.rounded_for_display()),
        Err(err) => {
            events::failed_open(detector.name(), &err.to_string());
            DuplicateCheckResponse::ok(SimilarityVerdict::fail_open())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, content: &str, item_type: &str) -> ContentRecord {
        ContentRecord::new(id, "t", content, item_type, "c")
    }

    #[test]
    fn drops_unretrievable_and_foreign_records() {
        let records = vec![
            record(1, "neon city", "prompt"),
            record(2, "", "prompt"),
            record(3, "retrievalError: timeout", "prompt"),
            record(4, "neon city", "dataset"),
        ];
        let kept: Vec<u64> = retrievable_records(&records, "prompt")
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(kept, vec![1]);
    }
}
