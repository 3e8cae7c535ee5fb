//! Gear position definitions and code tables

use serde::{Deserialize, Serialize};

/// Shift code for Parking.
pub const SHIFT_VALUE_PARKING: i32 = 0;
/// Shift code for Reverse.
pub const SHIFT_VALUE_REVERSE: i32 = 128;
/// Shift code for Neutral.
pub const SHIFT_VALUE_NEUTRAL: i32 = 64;
/// Shift code for Drive. Manual gears report this code too.
pub const SHIFT_VALUE_DRIVE: i32 = 4;
/// Shift code for Third.
pub const SHIFT_VALUE_THIRD: i32 = 3;
/// Shift code for Second.
pub const SHIFT_VALUE_SECOND: i32 = 2;
/// Shift code for First.
pub const SHIFT_VALUE_FIRST: i32 = 1;

/// Shift mode reported alongside the gear. Only normal mode is simulated.
pub const SHIFT_MODE_NORMAL: i32 = 0;

/// Every position the transmission can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GearPosition {
    /// P, the power-on position.
    #[default]
    Parking,
    /// R
    Reverse,
    /// N
    Neutral,
    /// D, with speed-banded ratios.
    Drive,
    /// Automatic 1
    First,
    /// Automatic 2
    Second,
    /// Automatic 3
    Third,
    /// Manual gate 1
    ManualFirst,
    /// Manual gate 2
    ManualSecond,
    /// Manual gate 3
    ManualThird,
    /// Manual gate 4
    ManualFourth,
    /// Manual gate 5
    ManualFifth,
    /// Manual gate 6
    ManualSixth,
}

impl GearPosition {
    /// External shift code published with the gear signal.
    pub fn shift_value(self) -> i32 {
        match self {
            Self::Parking => SHIFT_VALUE_PARKING,
            Self::Reverse => SHIFT_VALUE_REVERSE,
            Self::Neutral => SHIFT_VALUE_NEUTRAL,
            Self::Drive => SHIFT_VALUE_DRIVE,
            Self::Third | Self::ManualThird => SHIFT_VALUE_THIRD,
            Self::Second | Self::ManualSecond => SHIFT_VALUE_SECOND,
            Self::First | Self::ManualFirst => SHIFT_VALUE_FIRST,
            Self::ManualFourth | Self::ManualFifth | Self::ManualSixth => SHIFT_VALUE_DRIVE,
        }
    }

    /// Internal position id. Manual gears occupy 11..=16.
    pub fn position_id(self) -> i32 {
        match self {
            Self::Parking => 0,
            Self::Reverse => 1,
            Self::Neutral => 2,
            Self::Drive => 4,
            Self::First => 5,
            Self::Second => 6,
            Self::Third => 7,
            Self::ManualFirst => 11,
            Self::ManualSecond => 12,
            Self::ManualThird => 13,
            Self::ManualFourth => 14,
            Self::ManualFifth => 15,
            Self::ManualSixth => 16,
        }
    }

    /// Position id as published: manual ids are folded back onto the
    /// automatic range (`id - 10 + 4`, capped at Drive).
    pub fn external_position(self) -> i32 {
        let id = self.position_id();
        if id <= 10 {
            return id;
        }
        let folded = id - 10 + 4;
        if folded >= 8 { SHIFT_VALUE_DRIVE } else { folded }
    }

    /// True for the six manual gate gears. Reverse and Neutral are shared
    /// with the automatic ladder and do not count.
    pub fn is_manual(self) -> bool {
        matches!(
            self,
            Self::ManualFirst
                | Self::ManualSecond
                | Self::ManualThird
                | Self::ManualFourth
                | Self::ManualFifth
                | Self::ManualSixth
        )
    }
}

/// Targets reachable through the manual gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualTarget {
    /// Gate 1
    First,
    /// Gate 2
    Second,
    /// Gate 3
    Third,
    /// Gate 4
    Fourth,
    /// Gate 5
    Fifth,
    /// Gate 6
    Sixth,
    /// Reverse through the gate.
    Reverse,
    /// Selected when a gate button is released.
    Neutral,
}

impl ManualTarget {
    /// Gear position this target selects.
    pub fn position(self) -> GearPosition {
        match self {
            Self::First => GearPosition::ManualFirst,
            Self::Second => GearPosition::ManualSecond,
            Self::Third => GearPosition::ManualThird,
            Self::Fourth => GearPosition::ManualFourth,
            Self::Fifth => GearPosition::ManualFifth,
            Self::Sixth => GearPosition::ManualSixth,
            Self::Reverse => GearPosition::Reverse,
            Self::Neutral => GearPosition::Neutral,
        }
    }

    /// Gate targets in button order: first..sixth, then reverse.
    pub const GATE: [ManualTarget; 7] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Reverse,
    ];
}
