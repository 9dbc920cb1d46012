//! Jaccard index over sets: |A ∩ B| / |A ∪ B|.

use std::collections::HashSet;
use std::hash::Hash;

use super::tokenizer::tokenize;

/// Jaccard index of two sets. Returns 0.0 when both sets are empty.
pub fn jaccard_index<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|x| large.contains(*x)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Word-set Jaccard of two texts, keeping words of at least `min_chars` chars.
pub fn word_jaccard(a: &str, b: &str, min_chars: usize) -> f64 {
    let set_a: HashSet<String> = tokenize(a, min_chars).into_iter().collect();
    let set_b: HashSet<String> = tokenize(b, min_chars).into_iter().collect();
    jaccard_index(&set_a, &set_b)
}
