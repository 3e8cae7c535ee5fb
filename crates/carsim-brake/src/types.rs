//! Brake intensity and speed band classification

use serde::{Deserialize, Serialize};

use crate::{MIDDLE_BRAKE_MAX, SOFT_BRAKE_MAX};

/// How hard the brake is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrakeIntensity {
    /// Below [`SOFT_BRAKE_MAX`].
    Soft,
    /// Below [`MIDDLE_BRAKE_MAX`].
    Middle,
    /// Anything firmer.
    Hard,
}

impl BrakeIntensity {
    /// Classify a smoothed brake value.
    pub fn from_value(value: i32) -> Self {
        if value < SOFT_BRAKE_MAX {
            Self::Soft
        } else if value < MIDDLE_BRAKE_MAX {
            Self::Middle
        } else {
            Self::Hard
        }
    }

    /// Source speed (km/h) below which braking in this band stops the car.
    pub fn stop_floor(self) -> f64 {
        match self {
            Self::Soft => 15.0,
            Self::Middle => 22.0,
            Self::Hard => 30.0,
        }
    }
}

/// Road speed band used to select the reduction factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBand {
    /// Under 30 km/h.
    Low,
    /// 30 to 60 km/h.
    Mid,
    /// 60 km/h and above.
    High,
}

impl SpeedBand {
    /// Band containing `speed` (km/h). Negative speeds fall in [`SpeedBand::Low`].
    pub fn from_speed(speed: f64) -> Self {
        if speed < 30.0 {
            Self::Low
        } else if speed < 60.0 {
            Self::Mid
        } else {
            Self::High
        }
    }
}

/// Fraction of the source speed removed for a (speed band, intensity) pair.
///
/// Low speeds lose a larger share than high speeds for the same pedal force.
pub fn reduction_factor(band: SpeedBand, intensity: BrakeIntensity) -> f64 {
    match (band, intensity) {
        (SpeedBand::Low, BrakeIntensity::Soft) => 0.4,
        (SpeedBand::Low, BrakeIntensity::Middle) => 0.6,
        (SpeedBand::Low, BrakeIntensity::Hard) => 0.8,
        (SpeedBand::Mid, BrakeIntensity::Soft) => 0.3,
        (SpeedBand::Mid, BrakeIntensity::Middle) => 0.5,
        (SpeedBand::Mid, BrakeIntensity::Hard) => 0.7,
        (SpeedBand::High, BrakeIntensity::Soft) => 0.1,
        (SpeedBand::High, BrakeIntensity::Middle) => 0.3,
        (SpeedBand::High, BrakeIntensity::Hard) => 0.5,
    }
}
