//! Error types for carsimd

use carsim_errors::{ConfigError, ErrorCategory, ErrorSeverity, SimError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("Invalid script: {0}")]
    Script(String),

    #[error("Worker thread failed: {0}")]
    Thread(String),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Sim(e.into())
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CliError::Sim(e) => e.category(),
            CliError::Script(_) => ErrorCategory::Config,
            CliError::Thread(_) => ErrorCategory::Other,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CliError::Sim(e) => e.severity(),
            CliError::Script(_) => ErrorSeverity::Error,
            CliError::Thread(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code, by category: 2 for I/O, 3 for bad configuration
    /// or script, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::IO => 2,
            ErrorCategory::Config => 3,
            ErrorCategory::Geodesy | ErrorCategory::Channel | ErrorCategory::Other => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let io = CliError::from(ConfigError::Io {
            path: "x.yaml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        });
        assert_eq!(io.category(), ErrorCategory::IO);
        assert_eq!(io.exit_code(), 2);
        assert_eq!(CliError::from(ConfigError::invalid("a", "b")).exit_code(), 3);
        assert_eq!(CliError::Script("empty".into()).exit_code(), 3);
        assert_eq!(CliError::Thread("x".into()).exit_code(), 1);
    }

    #[test]
    fn sim_errors_keep_their_classification() {
        let lost = CliError::from(SimError::from(carsim_errors::ChannelError::Disconnected));
        assert_eq!(lost.category(), ErrorCategory::Channel);
        assert_eq!(lost.severity(), ErrorSeverity::Critical);
        assert_eq!(lost.exit_code(), 1);

        let bad = CliError::from(ConfigError::invalid("cycle_interval_ms", "must be positive"));
        assert!(bad.to_string().contains("cycle_interval_ms"));
        assert_eq!(bad.severity(), ErrorSeverity::Error);
    }
}
