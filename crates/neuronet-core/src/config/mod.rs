//! Configuration loaded from TOML. Every section falls back to its defaults.

pub mod defaults;
pub mod observability_config;
pub mod similarity_config;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use similarity_config::{KeywordGroup, MetricWeights, SimilarityConfig};

use crate::errors::NeuronetResult;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuronetConfig {
    pub similarity: SimilarityConfig,
    pub observability: ObservabilityConfig,
}

impl NeuronetConfig {
    /// Parse and validate a TOML document. An empty document yields all defaults.
    pub fn from_toml(source: &str) -> NeuronetResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.similarity.validate()?;
        Ok(config)
    }
}
