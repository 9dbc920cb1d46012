//! Similarity algorithms: tokenization and the six sub-metrics.
//!
//! Every metric returns a value in [0.0, 1.0] and is symmetric in its arguments.

pub mod cosine;
pub mod jaccard;
pub mod length;
pub mod levenshtein;
pub mod ngram;
pub mod semantic;
pub mod tokenizer;
