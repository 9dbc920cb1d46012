//! # neuronet-similarity
//!
//! Multi-metric duplicate detection for marketplace submissions.
//! Six sub-metrics (word Jaccard, term-frequency cosine, Levenshtein, character
//! n-grams, keyword groups, length) are blended into one percentage per existing
//! listing; the best match is classified accept / review / reject and explained.

pub mod algorithms;
pub mod analysis;
pub mod engine;
pub mod intake;
pub mod scoring;

pub use engine::SimilarityAnalyzer;
pub use intake::{check_duplicate, retrievable_records, DuplicateCheckRequest, DuplicateCheckResponse};
pub use scoring::PreparedText;
