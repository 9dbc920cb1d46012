//! Build the analysis report for the winning (candidate, matched) pair.
//!
//! Uses its own tokenization (`analysis_min_token_chars`, longer than the
//! scoring cutoff). Shared and exclusive term lists keep repeated tokens in
//! text order; key concepts are unique, candidate terms before matched-only terms.

use std::collections::HashSet;

use neuronet_core::config::SimilarityConfig;
use neuronet_core::constants::{
    EXISTING_CONTENT_PREFIX, NEW_CONTENT_PREFIX, SHARED_VOCABULARY_PREFIX, SIMILAR_LENGTH_NOTE,
};
use neuronet_core::models::{AnalysisReport, ReasoningBand};

use crate::algorithms::tokenizer::{tokenize, unique_in_order};

/// Generate the report for `candidate` vs `matched` at `percentage` similarity.
pub fn generate_report(
    candidate: &str,
    matched: &str,
    percentage: f64,
    config: &SimilarityConfig,
) -> AnalysisReport {
    let new_terms = tokenize(candidate, config.analysis_min_token_chars);
    let existing_terms = tokenize(matched, config.analysis_min_token_chars);

    let new_set: HashSet<&str> = new_terms.iter().map(String::as_str).collect();
    let existing_set: HashSet<&str> = existing_terms.iter().map(String::as_str).collect();

    let mut similarities = Vec::new();
    let shared: Vec<&str> = new_terms
        .iter()
        .map(String::as_str)
        .filter(|t| existing_set.contains(t))
        .take(config.max_shared_terms)
        .collect();
    if !shared.is_empty() {
        similarities.push(format!("{SHARED_VOCABULARY_PREFIX}{}", shared.join(", ")));
    }
    if has_similar_length(candidate, matched, config.similar_length_ratio) {
        similarities.push(SIMILAR_LENGTH_NOTE.to_string());
    }

    let mut differences = Vec::new();
    let only_new = exclusive_terms(&new_terms, &existing_set, config.max_unique_terms);
    if !only_new.is_empty() {
        differences.push(format!("{NEW_CONTENT_PREFIX}{}", only_new.join(", ")));
    }
    let only_existing = exclusive_terms(&existing_terms, &new_set, config.max_unique_terms);
    if !only_existing.is_empty() {
        differences.push(format!("{EXISTING_CONTENT_PREFIX}{}", only_existing.join(", ")));
    }

    let key_concepts = unique_in_order(new_terms.into_iter().chain(existing_terms).collect())
        .into_iter()
        .take(config.max_key_concepts)
        .collect();

    AnalysisReport {
        similarities,
        differences,
        key_concepts,
        reasoning: ReasoningBand::from_percentage(percentage)
            .reasoning()
            .to_string(),
    }
}

/// Up to `limit` of `terms` absent from `other`.
fn exclusive_terms<'a>(terms: &'a [String], other: &HashSet<&str>, limit: usize) -> Vec<&'a str> {
    terms
        .iter()
        .map(String::as_str)
        .filter(|t| !other.contains(t))
        .take(limit)
        .collect()
}

/// Both texts non-empty and shorter/longer (in chars) above `ratio`.
fn has_similar_length(a: &str, b: &str, ratio: f64) -> bool {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a == 0 || len_b == 0 {
        return false;
    }
    len_a.min(len_b) as f64 / len_a.max(len_b) as f64 > ratio
}
