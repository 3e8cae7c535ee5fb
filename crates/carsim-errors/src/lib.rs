//! Centralized error types for CarSim
//!
//! The simulation core (filters, engine, brake, transmission, integrator) is
//! infallible by construction: every input is clamped or saturated instead of
//! rejected. Errors only arise at the edges of the system:
//!
//! - [`geodesy`]: the iterative geodesic solver failing to converge
//! - [`config`]: loading and validating simulator configuration
//! - [`channel`]: handing signals between the control loop and the transport
//! - [`common`]: the top-level [`SimError`] wrapping all of the above
//!
//! # Example
//!
//! ```
//! use carsim_errors::prelude::*;
//!
//! fn check_wheelbase(value: f64) -> Result<f64> {
//!     if value <= 0.0 {
//!         return Err(ConfigError::invalid("wheelbase_m", "must be positive").into());
//!     }
//!     Ok(value)
//! }
//!
//! assert!(check_wheelbase(3.0).is_ok());
//! assert!(check_wheelbase(0.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod channel;
pub mod common;
pub mod config;
pub mod geodesy;
pub mod prelude;

pub use channel::ChannelError;
pub use common::{ErrorCategory, ErrorSeverity, SimError};
pub use config::ConfigError;
pub use geodesy::GeodesyError;

/// A specialized `Result` type for CarSim operations.
pub type Result<T> = std::result::Result<T, SimError>;
