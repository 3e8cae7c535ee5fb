//! Gear signal payload

use carsim_transmission::Transmission;
use serde::{Deserialize, Serialize};

/// Published gear triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GearSignal {
    /// Position id, with manual ids folded onto the automatic range.
    pub position: i32,
    /// Shift code (`P=0`, `R=128`, `N=64`, `D=4`, `3/2/1`).
    pub value: i32,
    /// Shift mode.
    pub mode: i32,
}

impl GearSignal {
    /// Snapshot the transmission's current gear.
    pub fn from_transmission(transmission: &Transmission) -> Self {
        Self {
            position: transmission.position().external_position(),
            value: transmission.value(),
            mode: transmission.mode(),
        }
    }
}

impl From<&Transmission> for GearSignal {
    fn from(transmission: &Transmission) -> Self {
        Self::from_transmission(transmission)
    }
}
