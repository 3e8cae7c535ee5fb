//! Prelude for the vehicle crate.

pub use crate::integrator::{ACC_PEDAL_FULL_SCALE, AXIS_CENTER, VehicleIntegrator, invert_axis};
pub use crate::samples::SampleSizes;
pub use carsim_transmission::{GearPosition, ManualTarget};
