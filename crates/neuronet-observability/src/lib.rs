//! # neuronet-observability
//!
//! Structured tracing for duplicate detection: subscriber setup, span macros,
//! and named log events.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_from_config};
