//! Vehicle integrator for CarSim
//!
//! [`VehicleIntegrator`] owns an [`Engine`](carsim_engine::Engine), a
//! [`Brake`](carsim_brake::Brake) and a
//! [`Transmission`](carsim_transmission::Transmission), plus the speed and
//! accelerator-pedal filters and the distance accumulators. Once per tick the
//! caller forwards any new axis samples and then calls
//! [`VehicleIntegrator::update_avg`], which replays the last known input when
//! nothing new arrived and integrates speed into distance.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use carsim_vehicle::prelude::*;
//!
//! let mut car = VehicleIntegrator::with_seed(SampleSizes::default(), 1);
//! car.chg_throttle(32767); // released pedal in Parking ignites the engine
//! assert!(car.is_engine_active());
//!
//! for _ in 0..3 {
//!     car.shift_down(); // P -> R -> N -> D
//! }
//! let start = Instant::now();
//! for tick in 0..20u64 {
//!     car.chg_throttle(65535);
//!     car.update_avg_at(start + Duration::from_millis(50 * tick));
//! }
//! assert!(car.speed() > 0.0);
//! assert!(car.total_run() > 0.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod integrator;
pub mod prelude;
pub mod samples;

pub use integrator::{ACC_PEDAL_FULL_SCALE, AXIS_CENTER, VehicleIntegrator, invert_axis};
pub use samples::SampleSizes;
