//! ThresholdClamp core — zero every value that exceeds its paired threshold.
//!
//! This crate contains:
//! - The in-place clamp over a value slice and an aligned threshold slice
//! - A rayon-backed parallel variant with identical results
//! - Error types for misaligned inputs and bad configuration
//! - TOML-loadable configuration selecting the sequential or parallel path
//!
//! "Clamp" here means replacing a value with zero when it is strictly greater
//! than its threshold. It is not min/max range clamping.

pub mod clamp;
pub mod config;
pub mod error;

pub use clamp::{clamp_above, clamp_above_counted, par_clamp_above, par_clamp_above_counted};
pub use config::{ClampConfig, DEFAULT_PARALLEL_MIN_LEN};
pub use error::{ClampError, ConfigError};
