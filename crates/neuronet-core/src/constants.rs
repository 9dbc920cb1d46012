/// NeuroNet duplicate detection version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage at or above which content is a duplicate and gets rejected.
pub const DUPLICATE_THRESHOLD: f64 = 95.0;

/// Percentage at or above which content is flagged for review.
pub const REVIEW_THRESHOLD: f64 = 85.0;

/// Percentage at or above which the reasoning reports moderate similarity.
/// Has no recommendation counterpart: 70..85 is still `accept`.
pub const MODERATE_SIMILARITY_THRESHOLD: f64 = 70.0;

/// Upper bound of a similarity percentage.
pub const MAX_PERCENTAGE: f64 = 100.0;

// --- Reasoning texts ---
pub const REASONING_NEARLY_IDENTICAL: &str =
    "Content is nearly identical to existing item. High risk of duplication.";
pub const REASONING_HIGH: &str =
    "Content shows high similarity to existing item. Requires careful review.";
pub const REASONING_MODERATE: &str =
    "Content has moderate similarity to existing item. May be acceptable with proper differentiation.";
pub const REASONING_LOW: &str = "Content shows low similarity to existing items. Likely acceptable.";
pub const REASONING_NO_COMPARISON: &str =
    "No existing content of the same type to compare against.";
pub const REASONING_FAIL_OPEN: &str = "Unable to analyze similarity";

// --- Analysis labels ---
pub const SHARED_VOCABULARY_PREFIX: &str = "Shared vocabulary: ";
pub const SIMILAR_LENGTH_NOTE: &str = "Similar content length";
pub const NEW_CONTENT_PREFIX: &str = "New content includes: ";
pub const EXISTING_CONTENT_PREFIX: &str = "Existing content includes: ";

/// Marker the storage layer leaves in content it failed to retrieve.
pub const RETRIEVAL_ERROR_MARKER: &str = "retrievalError";
