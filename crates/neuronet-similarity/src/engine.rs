//! SimilarityAnalyzer: implements IDuplicateDetector over the six blended metrics.
//!
//! Pipeline: filter by item type → prepare candidate once → score every
//! record (on rayon past `parallel_min_records`) → first-wins maximum →
//! classify → explain the winning pair.

use neuronet_core::config::SimilarityConfig;
use neuronet_core::errors::{NeuronetError, NeuronetResult};
use neuronet_core::models::{ContentRecord, MatchedRecord, MetricBreakdown, SimilarityVerdict};
use neuronet_core::traits::IDuplicateDetector;
use neuronet_observability::similarity_span;
use neuronet_observability::tracing_setup::events;
use rayon::prelude::*;
use tracing::debug;

use crate::analysis;
use crate::scoring::{self, PreparedText};

/// Multi-metric duplicate detector. Holds only immutable configuration, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct SimilarityAnalyzer {
    config: SimilarityConfig,
}

impl SimilarityAnalyzer {
    /// Build an analyzer, rejecting an invalid configuration.
    pub fn new(config: SimilarityConfig) -> NeuronetResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Tokenize and index a text under this analyzer's configuration.
    pub fn prepare(&self, text: &str) -> PreparedText {
        PreparedText::new(text, &self.config)
    }

    /// The six sub-scores of one pair.
    pub fn breakdown(&self, a: &str, b: &str) -> MetricBreakdown {
        scoring::breakdown(&self.prepare(a), &self.prepare(b))
    }

    /// Blended similarity percentage of one pair.
    pub fn score(&self, a: &str, b: &str) -> NeuronetResult<f64> {
        self.breakdown(a, b).percentage(&self.config.weights)
    }

    /// Compare `candidate` against every comparable record and classify the best match.
    pub fn analyze(
        &self,
        candidate: &str,
        item_type: &str,
        existing: &[ContentRecord],
    ) -> NeuronetResult<SimilarityVerdict> {
        let span = similarity_span!(item_type, existing.len());
        let _guard = span.enter();

        if let Some(limit) = self.config.max_content_chars {
            let len = candidate.chars().count();
            if len > limit {
                return Err(NeuronetError::invalid_argument(format!(
                    "candidate has {len} chars, limit is {limit}"
                )));
            }
        }

        let comparable: Vec<&ContentRecord> = existing
            .iter()
            .filter(|r| !self.config.filter_by_item_type || r.item_type == item_type)
            .collect();
        if comparable.is_empty() {
            debug!(item_type, "no comparable records");
            return Ok(SimilarityVerdict::no_comparison());
        }

        let prepared = self.prepare(candidate);
        let scores: Vec<NeuronetResult<f64>> =
            if comparable.len() >= self.config.parallel_min_records {
                debug!(records = comparable.len(), "scoring in parallel");
                comparable
                    .par_iter()
                    .map(|record| self.score_record(&prepared, record))
                    .collect()
            } else {
                comparable
                    .iter()
                    .map(|record| self.score_record(&prepared, record))
                    .collect()
            };

        // Sequential reduction: a later record must score strictly higher.
        let mut best: Option<(&ContentRecord, f64)> = None;
        let mut compared = 0usize;
        for (record, score) in comparable.iter().zip(scores) {
            match score {
                Ok(percentage) => {
                    compared += 1;
                    if best.map_or(true, |(_, top)| percentage > top) {
                        best = Some((*record, percentage));
                    }
                }
                Err(err) => events::record_skipped(record.id, &err.to_string()),
            }
        }

        let Some((record, percentage)) = best else {
            debug!(item_type, "every comparable record was skipped");
            return Ok(SimilarityVerdict::no_comparison());
        };

        let report =
            analysis::generate_report(candidate, &record.content, percentage, &self.config);
        let matched = MatchedRecord {
            id: record.id,
            title: record.title.clone(),
            content_hash: record.resolved_content_hash(),
            similarity_score: percentage,
        };
        let verdict = SimilarityVerdict::new(percentage, report, Some(matched));

        events::verdict_reached(
            percentage,
            verdict.recommendation.as_str(),
            Some(record.id),
            compared,
        );
        Ok(verdict)
    }

    fn score_record(&self, candidate: &PreparedText, record: &ContentRecord) -> NeuronetResult<f64> {
        if let Some(limit) = self.config.max_content_chars {
            let len = record.content.chars().count();
            if len > limit {
                return Err(NeuronetError::invalid_argument(format!(
                    "record has {len} chars, limit is {limit}"
                )));
            }
        }
        let breakdown = scoring::breakdown(candidate, &self.prepare(&record.content));
        let percentage = breakdown.percentage(&self.config.weights)?;
        debug!(record_id = record.id, percentage, ?breakdown, "scored record");
        Ok(percentage)
    }
}

impl Default for SimilarityAnalyzer {
    fn default() -> Self {
        Self {
            config: SimilarityConfig::default(),
        }
    }
}

impl IDuplicateDetector for SimilarityAnalyzer {
    fn analyze(
        &self,
        candidate: &str,
        item_type: &str,
        existing: &[ContentRecord],
    ) -> NeuronetResult<SimilarityVerdict> {
        SimilarityAnalyzer::analyze(self, candidate, item_type, existing)
    }

    fn name(&self) -> &str {
        "multi-metric-similarity"
    }
}
