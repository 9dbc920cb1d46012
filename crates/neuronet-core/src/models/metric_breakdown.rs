use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::MetricWeights;
use crate::constants::MAX_PERCENTAGE;
use crate::errors::{NeuronetError, NeuronetResult};

/// The six sub-scores of one (candidate, record) pair, each in [0.0, 1.0].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MetricBreakdown {
    /// Word-set overlap.
    pub jaccard: f64,
    /// Term-frequency cosine.
    pub cosine: f64,
    /// 1 − normalized edit distance.
    pub levenshtein: f64,
    /// Character n-gram overlap.
    pub ngram: f64,
    /// Keyword-group overlap.
    pub semantic: f64,
    /// Length ratio.
    pub length: f64,
}

impl MetricBreakdown {
    /// Sub-scores in blend order, paired with their names.
    pub fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("jaccard", self.jaccard),
            ("cosine", self.cosine),
            ("levenshtein", self.levenshtein),
            ("ngram", self.ngram),
            ("semantic", self.semantic),
            ("length", self.length),
        ]
    }

    /// Whether every sub-score lies in [0, 1].
    pub fn is_bounded(&self) -> bool {
        self.entries()
            .iter()
            .all(|(_, v)| (0.0..=1.0).contains(v))
    }

    /// Weighted sum, accumulated left to right in blend order.
    pub fn blend(&self, weights: &MetricWeights) -> f64 {
        self.jaccard * weights.jaccard
            + self.cosine * weights.cosine
            + self.levenshtein * weights.levenshtein
            + self.ngram * weights.ngram
            + self.semantic * weights.semantic
            + self.length * weights.length
    }

    /// Blended score as a percentage capped at 100.
    pub fn percentage(&self, weights: &MetricWeights) -> NeuronetResult<f64> {
        let blended = self.blend(weights);
        if !blended.is_finite() {
            let detail = self
                .entries()
                .iter()
                .map(|(name, v)| format!("{name}={v}"))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(NeuronetError::computation(format!(
                "blended score is not finite ({detail})"
            )));
        }
        Ok((blended * 100.0).min(MAX_PERCENTAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(v: f64) -> MetricBreakdown {
        MetricBreakdown {
            jaccard: v,
            cosine: v,
            levenshtein: v,
            ngram: v,
            semantic: v,
            length: v,
        }
    }

    #[test]
    fn zero_breakdown_is_zero_percent() {
        let p = uniform(0.0).percentage(&MetricWeights::default()).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn everything_but_semantic_gives_the_floor() {
        let mut b = uniform(1.0);
        b.semantic = 0.0;
        let p = b.percentage(&MetricWeights::default()).unwrap();
        assert!((p - 85.0).abs() < 1e-9);
    }

    #[test]
    fn percentage_is_capped() {
        let heavy = MetricWeights {
            jaccard: 2.0,
            ..MetricWeights::default()
        };
        assert_eq!(uniform(1.0).percentage(&heavy).unwrap(), 100.0);
    }

    #[test]
    fn nan_sub_score_is_a_computation_error() {
        let mut b = uniform(0.5);
        b.cosine = f64::NAN;
        let err = b.percentage(&MetricWeights::default()).unwrap_err();
        assert!(matches!(err, NeuronetError::ComputationError { .. }));
        assert!(!b.is_bounded());
    }
}
