//! Gear ratios
//!
//! A ratio converts the engine's RPM basis into a target road speed
//! (`speed = rpm_basis * ratio`). Drive picks one of five ratios by speed
//! band; when the engine is winding down a lower ratio is used in bands 2-5
//! so the speed does not flutter around a band edge.

use crate::state::Transmission;
use crate::types::GearPosition;

/// First gear, automatic or manual.
pub const RATIO_FIRST: f64 = 1.0 / 4.1;
/// Second gear.
pub const RATIO_SECOND: f64 = 1.0 / 2.8;
/// Third gear. Drive also falls back to it when winding down in band 4.
pub const RATIO_THIRD: f64 = 1.0 / 1.8;
/// Drive ratios for speed bands 1-5, lowest band first.
pub const RATIO_DRIVE: [f64; 5] = [1.0 / 2.3, 1.0 / 1.4, 1.0 / 1.0, 1.0 / 0.8, 1.0 / 0.46];
/// Reverse.
pub const RATIO_REVERSE: f64 = 1.0 / 3.1;

/// Upper bounds (exclusive) of Drive speed bands 1-4, in km/h.
pub const DRIVE_BAND_LIMITS: [f64; 4] = [9.0, 15.0, 23.0, 32.0];

/// Drive ratio for a given speed.
pub fn drive_ratio(speed: f64, downshifting: bool) -> f64 {
    let [d1, d2, d3, d4, d5] = RATIO_DRIVE;
    let [b1, b2, b3, b4] = DRIVE_BAND_LIMITS;
    if speed < b1 {
        d1
    } else if speed < b2 {
        if downshifting { RATIO_FIRST } else { d2 }
    } else if speed < b3 {
        if downshifting { RATIO_SECOND } else { d3 }
    } else if speed < b4 {
        if downshifting { RATIO_THIRD } else { d4 }
    } else if downshifting {
        d3
    } else {
        d5
    }
}

impl Transmission {
    /// Ratio for the current position.
    ///
    /// Third shares Drive's speed banding rather than using its own fixed
    /// ratio; regression tests pin this.
    pub fn gear_ratio(&self, speed: f64, downshifting: bool) -> f64 {
        let [d1, d2, d3, d4, d5] = RATIO_DRIVE;
        match self.position() {
            GearPosition::First | GearPosition::ManualFirst => RATIO_FIRST,
            GearPosition::Second => RATIO_SECOND,
            GearPosition::Third | GearPosition::Drive => drive_ratio(speed, downshifting),
            GearPosition::Reverse => RATIO_REVERSE,
            GearPosition::Parking | GearPosition::Neutral => 0.0,
            GearPosition::ManualSecond => d1,
            GearPosition::ManualThird => d2,
            GearPosition::ManualFourth => d3,
            GearPosition::ManualFifth => d4,
            GearPosition::ManualSixth => d5,
        }
    }
}
