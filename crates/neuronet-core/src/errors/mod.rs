//! Error taxonomy for duplicate detection.

/// Result alias used across the workspace.
pub type NeuronetResult<T> = Result<T, NeuronetError>;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum NeuronetError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("computation failed: {reason}")]
    ComputationError { reason: String },

    #[error("invalid configuration: {reason}")]
    ConfigError { reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NeuronetError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn computation(reason: impl Into<String>) -> Self {
        Self::ComputationError {
            reason: reason.into(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::ConfigError {
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for NeuronetError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError {
            reason: err.to_string(),
        }
    }
}
