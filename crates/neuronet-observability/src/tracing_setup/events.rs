//! Structured log events for duplicate detection.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log an existing record left out of the comparison.
pub fn record_skipped(record_id: u64, reason: &str) {
    tracing::warn!(
        event = "record_skipped",
        record_id = record_id,
        reason = %reason,
        "existing record skipped"
    );
}

/// Log the verdict of one analysis.
pub fn verdict_reached(
    similarity_percentage: f64,
    recommendation: &str,
    matched_id: Option<u64>,
    compared: usize,
) {
    tracing::info!(
        event = "verdict_reached",
        similarity_percentage = similarity_percentage,
        recommendation = %recommendation,
        matched_id = ?matched_id,
        compared = compared,
        "similarity verdict"
    );
}

/// Log an analysis failure that was answered with the accepting fallback.
pub fn failed_open(detector: &str, error: &str) {
    tracing::error!(
        event = "failed_open",
        detector = %detector,
        error = %error,
        "duplicate analysis failed, accepting submission"
    );
}

/// Log a rejected intake request.
pub fn request_rejected(reason: &str) {
    tracing::warn!(
        event = "request_rejected",
        reason = %reason,
        "duplicate check request rejected"
    );
}
