//! Engine model for CarSim
//!
//! Turns a stream of (already inverted) throttle samples into an engine
//! speed. The smoothed throttle opening, on a 0-100 scale, is the engine's
//! RPM basis; the displayed RPM is that basis multiplied by 100.
//!
//! A smoothed value under [`RPM_BOTTOM_BORDER`] is replaced by
//! [`IDLING_RPM`] plus up to one unit of random jitter, so a running engine
//! never reads out as stalled.
//!
//! # Example
//!
//! ```
//! use carsim_engine::prelude::*;
//!
//! let mut engine = Engine::with_seed(40, 7);
//! engine.chg_throttle(65534); // ignored, engine is off
//! assert!(!engine.is_active());
//!
//! engine.ignition_start(Some(IGNITION_RPM));
//! engine.chg_throttle(0);
//! // Idle floor kicks in.
//! assert!(engine.rpm() >= IDLING_RPM * 100.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod prelude;

pub use engine::{
    DEFAULT_RPM_SAMPLES, Engine, IDLING_RPM, IGNITION_RPM, RPM_BOTTOM_BORDER, THROTTLE_FULL_SCALE,
    throttle_to_percent,
};
