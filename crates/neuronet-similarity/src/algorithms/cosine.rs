//! Term-frequency cosine similarity.
//!
//! Frequencies and their products are accumulated as integers, so the result
//! does not depend on map iteration order and is exactly symmetric.

use std::collections::HashMap;

use super::tokenizer::tokenize;

/// Term-frequency map of a token list.
pub fn term_frequencies(tokens: &[String]) -> HashMap<String, u64> {
    let mut freq: HashMap<String, u64> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *freq.entry(token.clone()).or_insert(0) += 1;
    }
    freq
}

/// Cosine of two term-frequency vectors.
/// Returns 0.0 when either vector has zero magnitude.
pub fn tf_cosine(a: &HashMap<String, u64>, b: &HashMap<String, u64>) -> f64 {
    let mag_a: u128 = a.values().map(|&f| u128::from(f) * u128::from(f)).sum();
    let mag_b: u128 = b.values().map(|&f| u128::from(f) * u128::from(f)).sum();
    if mag_a == 0 || mag_b == 0 {
        return 0.0;
    }

    // Terms missing from either side contribute nothing to the dot product.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: u128 = small
        .iter()
        .filter_map(|(term, &f)| large.get(term).map(|&g| u128::from(f) * u128::from(g)))
        .sum();

    // Parallel vectors: exactly 1 rather than 1 ± rounding error.
    if dot * dot == mag_a * mag_b {
        return 1.0;
    }

    let denom = (mag_a as f64).sqrt() * (mag_b as f64).sqrt();
    (dot as f64 / denom).clamp(0.0, 1.0)
}

/// Term-frequency cosine of two texts, keeping words of at least `min_chars` chars.
pub fn text_cosine(a: &str, b: &str, min_chars: usize) -> f64 {
    let freq_a = term_frequencies(&tokenize(a, min_chars));
    let freq_b = term_frequencies(&tokenize(b, min_chars));
    tf_cosine(&freq_a, &freq_b)
}
