//! Prelude for the engine crate.

pub use crate::engine::{
    DEFAULT_RPM_SAMPLES, Engine, IDLING_RPM, IGNITION_RPM, RPM_BOTTOM_BORDER, THROTTLE_FULL_SCALE,
    throttle_to_percent,
};
