//! Per-pair scoring: six sub-metrics over pre-tokenized texts.

use std::collections::{HashMap, HashSet};

use neuronet_core::config::SimilarityConfig;
use neuronet_core::models::MetricBreakdown;

use crate::algorithms::{cosine, jaccard, length, levenshtein, ngram, semantic, tokenizer};

/// A text with everything the metrics need, computed once.
///
/// The candidate is prepared once per analysis and compared against each
/// existing record's prepared form.
#[derive(Debug, Clone)]
pub struct PreparedText {
    /// Raw chars, for edit distance and length.
    chars: Vec<char>,
    /// Scoring tokens as a set, for Jaccard.
    terms: HashSet<String>,
    /// Scoring token frequencies, for cosine.
    term_freq: HashMap<String, u64>,
    /// Lowercased character n-grams.
    ngrams: HashSet<String>,
    /// Hits per keyword group, in config order.
    keyword_hits: Vec<usize>,
}

impl PreparedText {
    pub fn new(text: &str, config: &SimilarityConfig) -> Self {
        let tokens = tokenizer::tokenize(text, config.scoring_min_token_chars);
        let term_freq = cosine::term_frequencies(&tokens);
        let terms = tokens.into_iter().collect();

        let lowered: Vec<char> = text.to_lowercase().chars().collect();
        let ngrams = ngram::char_ngrams(&lowered, config.ngram_size);

        let keyword_hits =
            semantic::keyword_hits(&tokenizer::words(text), &config.keyword_groups);

        Self {
            chars: text.chars().collect(),
            terms,
            term_freq,
            ngrams,
            keyword_hits,
        }
    }

    /// Length in chars.
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }
}

/// The six sub-scores of a prepared pair. Both sides must come from the same config.
pub fn breakdown(a: &PreparedText, b: &PreparedText) -> MetricBreakdown {
    MetricBreakdown {
        jaccard: jaccard::jaccard_index(&a.terms, &b.terms),
        cosine: cosine::tf_cosine(&a.term_freq, &b.term_freq),
        levenshtein: levenshtein::levenshtein_similarity(&a.chars, &b.chars),
        ngram: jaccard::jaccard_index(&a.ngrams, &b.ngrams),
        semantic: semantic::keyword_overlap(&a.keyword_hits, &b.keyword_hits),
        length: length::length_similarity(a.char_len(), b.char_len()),
    }
}
