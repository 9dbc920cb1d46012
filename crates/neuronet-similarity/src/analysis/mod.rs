//! Explanation of a verdict: shared vocabulary, differences, key concepts, reasoning.

pub mod report;

pub use report::generate_report;
