//! Brake model for CarSim
//!
//! This crate turns raw brake-axis samples into the three things the rest of
//! the simulator needs: a brake on/off flag, a 0-100 pressure reading, and a
//! speed reduction applied to the engine-derived target speed.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod brake;
pub mod types;

pub use brake::*;
pub use types::*;

/// Smoothed brake value at or below which the brake counts as released.
pub const LAG_BRAKE: i32 = 10240;

/// Raw brake count treated as full travel for pressure scaling.
pub const MAX_BRAKE: i32 = 65534;

/// Upper bound (exclusive) of the soft braking band.
pub const SOFT_BRAKE_MAX: i32 = 21000;

/// Upper bound (exclusive) of the middle braking band.
pub const MIDDLE_BRAKE_MAX: i32 = 42000;

/// Default brake filter window.
pub const DEFAULT_BRAKE_SAMPLES: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_constants_are_ordered() {
        assert!(LAG_BRAKE < SOFT_BRAKE_MAX);
        assert!(SOFT_BRAKE_MAX < MIDDLE_BRAKE_MAX);
        assert!(MIDDLE_BRAKE_MAX < MAX_BRAKE);
    }
}
