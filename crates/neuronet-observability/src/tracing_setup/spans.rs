//! Span definitions per operation.

/// Create a span around one duplicate analysis.
#[macro_export]
macro_rules! similarity_span {
    ($item_type:expr, $record_count:expr) => {
        tracing::info_span!(
            "neuronet.similarity",
            item_type = %$item_type,
            record_count = $record_count
        )
    };
}

/// Create a span around one intake request.
#[macro_export]
macro_rules! duplicate_check_span {
    ($detector:expr) => {
        tracing::info_span!("neuronet.duplicate_check", detector = %$detector)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SIMILARITY: &str = "neuronet.similarity";
    pub const DUPLICATE_CHECK: &str = "neuronet.duplicate_check";
}
