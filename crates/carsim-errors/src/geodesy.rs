//! Geodesic solver errors.

use crate::common::ErrorSeverity;

/// Errors raised by the direct geodesic solution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeodesyError {
    /// The angular-distance iteration did not settle within the cap
    #[error("Geodesic iteration did not converge after {iterations} iterations")]
    NoConvergence {
        /// Number of iterations performed
        iterations: u32,
    },

    /// An input was NaN or infinite
    #[error("Non-finite geodesic input: {field}")]
    NonFiniteInput {
        /// Name of the offending input
        field: &'static str,
    },
}

impl GeodesyError {
    /// Get the error severity.
    ///
    /// Both variants leave the previous position intact, so the caller can
    /// keep running on a fallback.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GeodesyError::NoConvergence { .. } => ErrorSeverity::Warning,
            GeodesyError::NonFiniteInput { .. } => ErrorSeverity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_convergence_display() {
        let err = GeodesyError::NoConvergence { iterations: 200 };
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = GeodesyError::NonFiniteInput { field: "lat" };
        assert!(err.to_string().contains("lat"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }
}
