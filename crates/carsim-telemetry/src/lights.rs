//! Turn signal and lamp state.

use serde::{Deserialize, Serialize};

/// Turn indicator state, published as `0`/`1`/`2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnSignal {
    #[default]
    Off,
    Right,
    Left,
}

impl TurnSignal {
    /// Wire code.
    pub fn code(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::Right => 1,
            Self::Left => 2,
        }
    }
}

/// Driver-controlled lamps.
///
/// Right and left indicators are mutually exclusive: switching one on
/// switches the other off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightState {
    head_light: bool,
    turn: TurnSignal,
}

impl LightState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the right indicator.
    pub fn toggle_right(&mut self) -> TurnSignal {
        self.turn = match self.turn {
            TurnSignal::Right => TurnSignal::Off,
            _ => TurnSignal::Right,
        };
        self.turn
    }

    /// Toggle the left indicator.
    pub fn toggle_left(&mut self) -> TurnSignal {
        self.turn = match self.turn {
            TurnSignal::Left => TurnSignal::Off,
            _ => TurnSignal::Left,
        };
        self.turn
    }

    /// Toggle the head light, returning the new state.
    pub fn toggle_head_light(&mut self) -> bool {
        self.head_light = !self.head_light;
        self.head_light
    }

    pub fn turn(&self) -> TurnSignal {
        self.turn
    }

    pub fn head_light(&self) -> bool {
        self.head_light
    }

    /// `[head, left, right, parking, fog, hazard, brake, high beam]`.
    pub fn to_flags(&self) -> [u8; 8] {
        [
            u8::from(self.head_light),
            u8::from(self.turn == TurnSignal::Left),
            u8::from(self.turn == TurnSignal::Right),
            0,
            0,
            0,
            0,
            0,
        ]
    }
}
