//! CarSim control loop.
//!
//! Device events arrive on a bounded [`input_channel`]. The loop applies
//! them to a [`Simulator`], ticks it every `tick_interval_ms`, and hands
//! changed signals to a [`SignalSink`](carsim_telemetry::SignalSink),
//! normally the sending half of a
//! [`signal_channel`](carsim_telemetry::signal_channel).
//!
//! ```no_run
//! use std::sync::atomic::AtomicBool;
//!
//! use carsim_config::SimulatorConfig;
//! use carsim_service::{input_channel, run_loop};
//! use carsim_telemetry::signal_channel;
//!
//! let config = SimulatorConfig::default();
//! let (_events, inputs) = input_channel(config.input_queue_capacity);
//! let (mut signals, _transport) = signal_channel(config.signal_queue_capacity);
//! let stop = AtomicBool::new(false);
//! run_loop(&config, &inputs, &mut signals, &stop);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]

pub mod cadence;
pub mod input;
pub mod prelude;
pub mod route;
pub mod runner;
pub mod simulator;
pub mod steering;

pub use cadence::{Cycle, TickCadence};
pub use input::{InputAction, InputEvent, InputMapper, pedal_raw, steering_delta_deg};
pub use route::{RouteFollower, RouteStep, has_passed};
pub use runner::{LoopExit, LoopSummary, input_channel, run_loop, run_simulator};
pub use simulator::Simulator;
pub use steering::{SteeringState, display_angle};
