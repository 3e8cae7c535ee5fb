//! Prelude for the errors crate.
//!
//! ```
//! use carsim_errors::prelude::*;
//!
//! let err: SimError = GeodesyError::NoConvergence { iterations: 200 }.into();
//! assert_eq!(err.category(), ErrorCategory::Geodesy);
//! ```

pub use crate::Result;
pub use crate::channel::ChannelError;
pub use crate::common::{ErrorCategory, ErrorSeverity, SimError};
pub use crate::config::ConfigError;
pub use crate::geodesy::GeodesyError;
