//! Character n-gram overlap.

use std::collections::HashSet;

use super::jaccard::jaccard_index;

/// All contiguous `n`-char substrings of `chars`. Empty when `chars` is shorter than `n`.
pub fn char_ngrams(chars: &[char], n: usize) -> HashSet<String> {
    if n == 0 {
        return HashSet::new();
    }
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard of the lowercased `n`-gram sets of two texts. 0.0 when both sets are empty.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    jaccard_index(&char_ngrams(&a, n), &char_ngrams(&b, n))
}
