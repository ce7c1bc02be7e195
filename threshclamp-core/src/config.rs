//! Serializable clamp configuration.
//!
//! ```toml
//! parallel = true
//! parallel_min_len = 100000
//! ```
//!
//! Missing keys take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::clamp::{clamp_above_counted, par_clamp_above_counted};
use crate::error::{ClampError, ConfigError};

/// Below this many elements the parallel path runs sequentially.
pub const DEFAULT_PARALLEL_MIN_LEN: usize = 65_536;

/// Selects how [`ClampConfig::apply`] walks the slices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClampConfig {
    /// Use the rayon-backed path for large inputs.
    pub parallel: bool,

    /// Minimum length before the parallel path is taken.
    pub parallel_min_len: usize,
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_min_len: DEFAULT_PARALLEL_MIN_LEN,
        }
    }
}

impl ClampConfig {
    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_min_len == 0 {
            return Err(ConfigError::Invalid(
                "parallel_min_len must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Whether an input of `len` elements takes the parallel path.
    pub fn uses_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_min_len
    }

    /// Run the clamp with this configuration, returning the zeroed count.
    pub fn apply(&self, values: &mut [f64], thresholds: &[f64]) -> Result<usize, ClampError> {
        if self.uses_parallel(values.len()) {
            par_clamp_above_counted(values, thresholds)
        } else {
            clamp_above_counted(values, thresholds)
        }
    }
}
