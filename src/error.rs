//! Error types for orrery.
//!
//! Errors exist only at the configuration boundary (file I/O, YAML
//! parsing, schema and semantic validation). The kinematics and geo
//! mapping cores are total functions and never fail.

use thiserror::Error;

/// Result type alias for orrery operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Unified error type for all orrery operations.
#[derive(Debug, Error)]
pub enum OrreryError {
    /// Invalid scene configuration.
    #[error("Scene configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OrreryError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
