//! Error types for the clamp and its configuration.

use thiserror::Error;

/// Errors from the clamp operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClampError {
    #[error("length mismatch: {values} values but {thresholds} thresholds")]
    LengthMismatch { values: usize, thresholds: usize },
}

/// Errors from loading or validating a [`crate::ClampConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
