//! Device events and their mapping onto vehicle controls.

use carsim_config::{InputBindings, ShifterKind};
use carsim_transmission::ManualTarget;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Raw event from the joystick layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Axis moved to `value` (signed device count).
    Axis { number: u32, value: i32 },
    /// Button pressed or released.
    Button { number: u32, pressed: bool },
}

/// What an event does to the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Raw accelerator count, already in integrator space.
    Throttle(i32),
    /// Raw brake count, already in integrator space.
    Brake(i32),
    /// Raw steering count.
    Steering(i32),
    ShiftUp,
    ShiftDown,
    Manual(ManualTarget),
    ToggleTurnRight,
    ToggleTurnLeft,
    ToggleHeadLight,
}

/// Convert a pedal axis count into the integrator's raw range.
///
/// A resting pedal (`value <= 0`) maps to the axis centre, which the
/// integrator reads as released; a fully pressed pedal maps to the far end.
pub fn pedal_raw(value: i32) -> i32 {
    if value <= 0 {
        return 32767;
    }
    value.saturating_sub(16384).saturating_mul(-2)
}

/// Steering count to whole degrees of wheel angle: `value * 10 / 65536`.
pub fn steering_delta_deg(value: i32) -> i32 {
    let scaled = i64::from(value) * 10 / 65536;
    i32::try_from(scaled).unwrap_or_default()
}

/// Maps device events to [`InputAction`]s according to [`InputBindings`].
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: InputBindings,
}

impl InputMapper {
    pub fn new(bindings: InputBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &InputBindings {
        &self.bindings
    }

    /// Translate one event. Unbound axes and buttons, and releases that mean
    /// nothing, yield `None`.
    pub fn map(&self, event: InputEvent) -> Option<InputAction> {
        let action = match event {
            InputEvent::Axis { number, value } => self.map_axis(number, value),
            InputEvent::Button { number, pressed } => self.map_button(number, pressed),
        };
        if action.is_none() {
            trace!(?event, "unmapped input");
        }
        action
    }

    fn map_axis(&self, number: u32, value: i32) -> Option<InputAction> {
        let b = &self.bindings;
        if number == b.steering_axis {
            Some(InputAction::Steering(value))
        } else if number == b.accelerator_axis {
            Some(InputAction::Throttle(pedal_raw(value)))
        } else if number == b.brake_axis {
            Some(InputAction::Brake(pedal_raw(value)))
        } else {
            None
        }
    }

    fn map_button(&self, number: u32, pressed: bool) -> Option<InputAction> {
        let b = &self.bindings;
        if pressed {
            if number == b.turn_right_button {
                return Some(InputAction::ToggleTurnRight);
            }
            if number == b.turn_left_button {
                return Some(InputAction::ToggleTurnLeft);
            }
            if number == b.head_light_button {
                return Some(InputAction::ToggleHeadLight);
            }
        }

        match b.shifter {
            ShifterKind::Sequential => {
                if !pressed {
                    None
                } else if number == b.shift_up_button {
                    Some(InputAction::ShiftUp)
                } else if number == b.shift_down_button {
                    Some(InputAction::ShiftDown)
                } else {
                    None
                }
            }
            ShifterKind::HPattern => {
                let slot = b.manual_gate_buttons.iter().position(|&n| n == number)?;
                if pressed {
                    ManualTarget::GATE.get(slot).copied().map(InputAction::Manual)
                } else {
                    Some(InputAction::Manual(ManualTarget::Neutral))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(number: u32) -> InputEvent {
        InputEvent::Button { number, pressed: true }
    }

    fn release(number: u32) -> InputEvent {
        InputEvent::Button { number, pressed: false }
    }

    #[test]
    fn test_pedal_raw() {
        assert_eq!(pedal_raw(-32767), 32767);
        assert_eq!(pedal_raw(0), 32767);
        assert_eq!(pedal_raw(16384), 0);
        assert_eq!(pedal_raw(32767), -32766);
        assert_eq!(pedal_raw(1), 32766);
    }

    #[test]
    fn test_steering_delta() {
        assert_eq!(steering_delta_deg(0), 0);
        assert_eq!(steering_delta_deg(32767), 4);
        assert_eq!(steering_delta_deg(-32767), -4);
        assert_eq!(steering_delta_deg(6553), 0);
        assert_eq!(steering_delta_deg(6554), 1);
    }

    #[test]
    fn test_axes() {
        let mapper = InputMapper::new(InputBindings::default());
        assert_eq!(
            mapper.map(InputEvent::Axis { number: 0, value: -100 }),
            Some(InputAction::Steering(-100))
        );
        assert_eq!(
            mapper.map(InputEvent::Axis { number: 1, value: 0 }),
            Some(InputAction::Throttle(32767))
        );
        assert_eq!(
            mapper.map(InputEvent::Axis { number: 2, value: 32767 }),
            Some(InputAction::Brake(-32766))
        );
        assert_eq!(mapper.map(InputEvent::Axis { number: 7, value: 5 }), None);
    }

    #[test]
    fn test_sequential_shifter() {
        let mapper = InputMapper::new(InputBindings::default());
        assert_eq!(mapper.map(press(11)), Some(InputAction::ShiftUp));
        assert_eq!(mapper.map(press(10)), Some(InputAction::ShiftDown));
        assert_eq!(mapper.map(release(10)), None);
        assert_eq!(mapper.map(press(12)), None);
    }

    #[test]
    fn test_h_pattern_shifter() {
        let mapper = InputMapper::new(InputBindings {
            shifter: ShifterKind::HPattern,
            ..InputBindings::default()
        });
        assert_eq!(mapper.map(press(12)), Some(InputAction::Manual(ManualTarget::First)));
        assert_eq!(mapper.map(press(17)), Some(InputAction::Manual(ManualTarget::Sixth)));
        assert_eq!(mapper.map(press(18)), Some(InputAction::Manual(ManualTarget::Reverse)));
        assert_eq!(mapper.map(release(14)), Some(InputAction::Manual(ManualTarget::Neutral)));
        assert_eq!(mapper.map(press(11)), None);
    }

    #[test]
    fn test_lights_on_press_only() {
        let mapper = InputMapper::new(InputBindings::default());
        assert_eq!(mapper.map(press(4)), Some(InputAction::ToggleTurnRight));
        assert_eq!(mapper.map(press(5)), Some(InputAction::ToggleTurnLeft));
        assert_eq!(mapper.map(press(3)), Some(InputAction::ToggleHeadLight));
        assert_eq!(mapper.map(release(3)), None);
    }

    #[test]
    fn test_event_serde_shape() -> Result<(), Box<dyn std::error::Error>> {
        let event: InputEvent = serde_json::from_str(r#"{"type":"axis","number":1,"value":-200}"#)?;
        assert_eq!(event, InputEvent::Axis { number: 1, value: -200 });
        let event: InputEvent = serde_json::from_str(r#"{"type":"button","number":11,"pressed":true}"#)?;
        assert_eq!(event, press(11));
        Ok(())
    }
}
