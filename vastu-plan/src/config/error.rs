//! Configuration loading errors.

use thiserror::Error;

/// Failure to load or validate a [`VastuPlanConfig`](super::VastuPlanConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(String),
    /// The file is not valid YAML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Validation(String),
}
