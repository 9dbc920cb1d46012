//! # neuronet-core
//!
//! Foundation crate for NeuroNet marketplace duplicate detection.
//! Defines the boundary models, the error taxonomy, configuration, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{NeuronetConfig, SimilarityConfig};
pub use errors::{NeuronetError, NeuronetResult};
pub use models::{
    AnalysisReport, ContentRecord, MatchedRecord, MetricBreakdown, ReasoningBand, Recommendation,
    SimilarityVerdict,
};
pub use traits::IDuplicateDetector;
