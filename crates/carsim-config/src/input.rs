//! Joystick axis and button bindings.

use serde::{Deserialize, Serialize};

/// How gear changes are entered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShifterKind {
    /// Paddle style up/down buttons walking the automatic ladder.
    #[default]
    Sequential,
    /// Gated shifter: one button per gear, release selects neutral.
    HPattern,
}

/// Device axis and button numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBindings {
    pub steering_axis: u32,
    pub accelerator_axis: u32,
    pub brake_axis: u32,
    pub shift_up_button: u32,
    pub shift_down_button: u32,
    /// Gate buttons for first..sixth, then reverse.
    pub manual_gate_buttons: [u32; 7],
    pub turn_right_button: u32,
    pub turn_left_button: u32,
    pub head_light_button: u32,
    pub shifter: ShifterKind,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            steering_axis: 0,
            accelerator_axis: 1,
            brake_axis: 2,
            shift_up_button: 11,
            shift_down_button: 10,
            manual_gate_buttons: [12, 13, 14, 15, 16, 17, 18],
            turn_right_button: 4,
            turn_left_button: 5,
            head_light_button: 3,
            shifter: ShifterKind::Sequential,
        }
    }
}

impl InputBindings {
    /// Named axis bindings, for duplicate detection and diagnostics.
    pub fn axes(&self) -> [(&'static str, u32); 3] {
        [
            ("input.steering_axis", self.steering_axis),
            ("input.accelerator_axis", self.accelerator_axis),
            ("input.brake_axis", self.brake_axis),
        ]
    }

    /// Named button bindings.
    pub fn buttons(&self) -> Vec<(&'static str, u32)> {
        const GATE: [&str; 7] = [
            "input.manual_gate_buttons[first]",
            "input.manual_gate_buttons[second]",
            "input.manual_gate_buttons[third]",
            "input.manual_gate_buttons[fourth]",
            "input.manual_gate_buttons[fifth]",
            "input.manual_gate_buttons[sixth]",
            "input.manual_gate_buttons[reverse]",
        ];
        let mut buttons = vec![
            ("input.shift_up_button", self.shift_up_button),
            ("input.shift_down_button", self.shift_down_button),
            ("input.turn_right_button", self.turn_right_button),
            ("input.turn_left_button", self.turn_left_button),
            ("input.head_light_button", self.head_light_button),
        ];
        buttons.extend(GATE.iter().copied().zip(self.manual_gate_buttons));
        buttons
    }

    /// First binding that reuses a number already taken by another binding
    /// of the same kind, as `(field, other_field)`.
    pub fn first_duplicate(&self) -> Option<(&'static str, &'static str)> {
        fn scan(bindings: &[(&'static str, u32)]) -> Option<(&'static str, &'static str)> {
            bindings.iter().enumerate().find_map(|(i, (name, number))| {
                bindings
                    .iter()
                    .take(i)
                    .find(|(_, other)| other == number)
                    .map(|(other_name, _)| (*name, *other_name))
            })
        }
        scan(&self.axes()).or_else(|| scan(&self.buttons()))
    }
}
