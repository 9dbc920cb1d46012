//! Lowercase + whitespace tokenizer shared by the metrics and the analysis report.

use std::collections::HashSet;

/// Lowercase `text`, split on whitespace, keep words of at least `min_chars` chars.
///
/// Punctuation stays attached to its word, so "facades," and "facades" differ.
pub fn tokenize(text: &str, min_chars: usize) -> Vec<String> {
    text.split_whitespace()
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() >= min_chars)
        .collect()
}

/// Lowercased whitespace-separated words, no length filter.
pub fn words(text: &str) -> Vec<String> {
    tokenize(text, 0)
}

/// Drop repeated tokens, keeping the first occurrence of each.
pub fn unique_in_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
