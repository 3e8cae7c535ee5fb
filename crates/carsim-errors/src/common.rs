//! Top-level error type and classification shared by all CarSim crates.

use core::fmt;

use crate::{ChannelError, ConfigError, GeodesyError};

/// Top-level error type that can wrap all CarSim sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// Geodesic solver errors
    #[error("Geodesy error: {0}")]
    Geodesy(#[from] GeodesyError),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Signal or input queue errors
    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl SimError {
    /// Get the error category for classification.
    ///
    /// A configuration file that could not be read counts as I/O.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SimError::Geodesy(_) => ErrorCategory::Geodesy,
            SimError::Config(ConfigError::Io { .. }) => ErrorCategory::IO,
            SimError::Config(_) => ErrorCategory::Config,
            SimError::Channel(_) => ErrorCategory::Channel,
            SimError::Io(_) => ErrorCategory::IO,
            SimError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SimError::Geodesy(e) => e.severity(),
            SimError::Config(e) => e.severity(),
            SimError::Channel(e) => e.severity(),
            SimError::Io(_) => ErrorSeverity::Error,
            SimError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// Check if the simulation can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        SimError::Other(msg.into())
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Geodesic solver errors
    Geodesy = 0,
    /// Configuration errors
    Config = 1,
    /// Queue hand-off errors
    Channel = 2,
    /// I/O errors
    IO = 3,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Geodesy => write!(f, "Geodesy"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Channel => write!(f, "Channel"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, the simulation cannot continue
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
