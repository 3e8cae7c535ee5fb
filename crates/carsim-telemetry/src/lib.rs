//! Vehicle signal outputs for CarSim
//!
//! The control loop turns integrator state into [`VehicleSignal`]s, filters
//! them through a [`SignalTracker`] so only changes go out, and hands them to
//! a [`SignalSink`]. The production sink is the sending half of a bounded
//! [`signal_channel`]; a transport thread drains the receiving half.
//!
//! # Example
//!
//! ```
//! use carsim_telemetry::prelude::*;
//!
//! let (mut tx, rx) = signal_channel(8);
//! let mut tracker = SignalTracker::new();
//!
//! for speed in [0, 0, 12] {
//!     tracker.publish_if_changed(&mut tx, VehicleSignal::Velocity(speed));
//! }
//! let sent: Vec<_> = rx.drain();
//! assert_eq!(sent, vec![VehicleSignal::Velocity(0), VehicleSignal::Velocity(12)]);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_debug_implementations)]

pub mod channel;
pub mod gear;
pub mod lights;
pub mod prelude;
pub mod signal;
pub mod sink;
pub mod tracker;

pub use channel::{SignalReceiver, SignalSender, signal_channel};
pub use gear::GearSignal;
pub use lights::{LightState, TurnSignal};
pub use signal::{SignalKind, VehicleSignal};
pub use sink::{RecordingSink, SignalSink};
pub use tracker::SignalTracker;
