//! Typed boundary models: records in, verdicts out.

pub mod analysis_report;
pub mod content_record;
pub mod metric_breakdown;
pub mod recommendation;
pub mod verdict;

pub use analysis_report::AnalysisReport;
pub use content_record::ContentRecord;
pub use metric_breakdown::MetricBreakdown;
pub use recommendation::{ReasoningBand, Recommendation};
pub use verdict::{MatchedRecord, SimilarityVerdict};
