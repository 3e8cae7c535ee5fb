//! Prelude for the telemetry crate.

pub use crate::channel::{SignalReceiver, SignalSender, signal_channel};
pub use crate::gear::GearSignal;
pub use crate::lights::{LightState, TurnSignal};
pub use crate::signal::{SignalKind, VehicleSignal};
pub use crate::sink::{RecordingSink, SignalSink};
pub use crate::tracker::SignalTracker;
