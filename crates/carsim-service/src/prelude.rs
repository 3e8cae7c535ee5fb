//! Prelude for the service crate.

pub use crate::cadence::{Cycle, TickCadence};
pub use crate::input::{InputAction, InputEvent, InputMapper};
pub use crate::route::{RouteFollower, RouteStep};
pub use crate::runner::{LoopExit, LoopSummary, input_channel, run_loop, run_simulator};
pub use crate::simulator::Simulator;
pub use crate::steering::SteeringState;
