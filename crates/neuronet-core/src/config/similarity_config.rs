use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{NeuronetError, NeuronetResult};

/// Weight of each sub-metric in the blended score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricWeights {
    pub jaccard: f64,
    pub cosine: f64,
    pub levenshtein: f64,
    pub ngram: f64,
    pub semantic: f64,
    pub length: f64,
}

impl MetricWeights {
    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Weights in blend order: jaccard, cosine, levenshtein, ngram, semantic, length.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.jaccard,
            self.cosine,
            self.levenshtein,
            self.ngram,
            self.semantic,
            self.length,
        ]
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self {
            jaccard: defaults::DEFAULT_JACCARD_WEIGHT,
            cosine: defaults::DEFAULT_COSINE_WEIGHT,
            levenshtein: defaults::DEFAULT_LEVENSHTEIN_WEIGHT,
            ngram: defaults::DEFAULT_NGRAM_WEIGHT,
            semantic: defaults::DEFAULT_SEMANTIC_WEIGHT,
            length: defaults::DEFAULT_LENGTH_WEIGHT,
        }
    }
}

/// A named list of related terms used as a coarse topical proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub name: String,
    pub terms: Vec<String>,
}

impl KeywordGroup {
    pub fn new(name: impl Into<String>, terms: &[&str]) -> Self {
        Self {
            name: name.into(),
            terms: terms.iter().map(|t| t.to_lowercase()).collect(),
        }
    }

    /// Whether `word` (already lowercased) is one of this group's terms.
    pub fn contains(&self, word: &str) -> bool {
        self.terms.iter().any(|t| t == word)
    }
}

/// Similarity engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Character n-gram length for the n-gram metric.
    pub ngram_size: usize,
    /// Minimum token length (in chars) kept by the scoring tokenizer.
    pub scoring_min_token_chars: usize,
    /// Minimum token length (in chars) kept by the analysis tokenizer.
    pub analysis_min_token_chars: usize,
    /// Shared terms listed in the "Shared vocabulary" line.
    pub max_shared_terms: usize,
    /// Terms listed per side in the differences.
    pub max_unique_terms: usize,
    /// Key concepts reported.
    pub max_key_concepts: usize,
    /// Shorter/longer length ratio above which lengths count as similar.
    pub similar_length_ratio: f64,
    /// Ignore records whose item type differs from the requested one.
    pub filter_by_item_type: bool,
    /// Record count at which comparisons run on the rayon pool.
    pub parallel_min_records: usize,
    /// Upper bound on content length in chars; `None` disables the limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_content_chars: Option<usize>,
    /// Weights of the blended score.
    pub weights: MetricWeights,
    /// Semantic keyword groups.
    pub keyword_groups: Vec<KeywordGroup>,
}

impl SimilarityConfig {
    /// Check invariants the engine relies on.
    pub fn validate(&self) -> NeuronetResult<()> {
        for (name, weight) in [
            "jaccard",
            "cosine",
            "levenshtein",
            "ngram",
            "semantic",
            "length",
        ]
        .into_iter()
        .zip(self.weights.as_array())
        {
            if !weight.is_finite() || weight < 0.0 {
                return Err(NeuronetError::config(format!(
                    "weight `{name}` must be finite and non-negative, got {weight}"
                )));
            }
        }
        if self.weights.total() <= 0.0 {
            return Err(NeuronetError::config("weights must not all be zero"));
        }
        if self.ngram_size == 0 {
            return Err(NeuronetError::config("ngram_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.similar_length_ratio) {
            return Err(NeuronetError::config(format!(
                "similar_length_ratio must be within [0, 1], got {}",
                self.similar_length_ratio
            )));
        }
        if let Some(group) = self.keyword_groups.iter().find(|g| g.name.trim().is_empty()) {
            return Err(NeuronetError::config(format!(
                "keyword group with terms {:?} has an empty name",
                group.terms
            )));
        }
        if self.max_content_chars == Some(0) {
            return Err(NeuronetError::config(
                "max_content_chars must be positive when set",
            ));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            ngram_size: defaults::DEFAULT_NGRAM_SIZE,
            scoring_min_token_chars: defaults::DEFAULT_SCORING_MIN_TOKEN_CHARS,
            analysis_min_token_chars: defaults::DEFAULT_ANALYSIS_MIN_TOKEN_CHARS,
            max_shared_terms: defaults::DEFAULT_MAX_SHARED_TERMS,
            max_unique_terms: defaults::DEFAULT_MAX_UNIQUE_TERMS,
            max_key_concepts: defaults::DEFAULT_MAX_KEY_CONCEPTS,
            similar_length_ratio: defaults::DEFAULT_SIMILAR_LENGTH_RATIO,
            filter_by_item_type: defaults::DEFAULT_FILTER_BY_ITEM_TYPE,
            parallel_min_records: defaults::DEFAULT_PARALLEL_MIN_RECORDS,
            max_content_chars: defaults::DEFAULT_MAX_CONTENT_CHARS,
            weights: MetricWeights::default(),
            keyword_groups: defaults::DEFAULT_KEYWORD_GROUPS
                .iter()
                .map(|(name, terms)| KeywordGroup::new(*name, terms))
                .collect(),
        }
    }
}
