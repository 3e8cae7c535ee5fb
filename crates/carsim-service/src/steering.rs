//! Steering wheel state.

use crate::input::steering_delta_deg;

/// Latched steering input.
///
/// The raw count drives the displayed wheel angle. The heading update uses
/// the last non-zero count scaled to whole degrees, so a centred wheel keeps
/// the previous delta until the next deflection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteeringState {
    raw: i32,
    delta_deg: i32,
}

impl SteeringState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_axis(&mut self, value: i32) {
        self.raw = value;
        if value != 0 {
            self.delta_deg = steering_delta_deg(value);
        }
    }

    pub fn raw(&self) -> i32 {
        self.raw
    }

    /// Wheel deflection fed to the heading update.
    pub fn delta_deg(&self) -> i32 {
        self.delta_deg
    }

    /// Displayed steering wheel angle in whole degrees, `[0, 360)`.
    pub fn display_angle(&self) -> i32 {
        display_angle(self.raw)
    }
}

/// Map a raw steering count onto a 900 degree wheel shown as `[0, 360)`.
pub fn display_angle(raw: i32) -> i32 {
    let deg = f64::from(raw) / 32768.0 * 450.0;
    let angle = if raw < 0 {
        (deg + 450.0 + 270.0).rem_euclid(360.0)
    } else {
        deg.rem_euclid(360.0)
    };
    (angle as i32).clamp(0, 359)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_angle() {
        assert_eq!(display_angle(0), 0);
        assert_eq!(display_angle(16384), 225);
        assert_eq!(display_angle(32767), 89);
        assert_eq!(display_angle(-16384), 135);
        assert_eq!(display_angle(-32768), 270);
    }

    #[test]
    fn test_centred_wheel_keeps_delta() {
        let mut steering = SteeringState::new();
        steering.on_axis(20000);
        assert_eq!(steering.delta_deg(), 3);
        steering.on_axis(0);
        assert_eq!(steering.raw(), 0);
        assert_eq!(steering.delta_deg(), 3);
        assert_eq!(steering.display_angle(), 0);
    }
}
