//! Configuration loading and validation errors.

use std::path::PathBuf;

use crate::common::ErrorSeverity;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file contents could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The file extension does not map to a known format
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// A field holds a value the simulator cannot run with
    #[error("Invalid value for '{field}': {reason}")]
    Invalid {
        /// Field name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid-field error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }
}
