//! Gear state transitions

use tracing::debug;

use crate::types::{GearPosition, ManualTarget, SHIFT_MODE_NORMAL};

/// Gear state: current position plus the one before the last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transmission {
    position: GearPosition,
    previous: GearPosition,
}

impl Transmission {
    /// A transmission in Parking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one position down the automatic ladder (`P -> R -> N -> D -> 3 -> 2 -> 1`).
    ///
    /// Saturates at First. Manual positions have no automatic neighbour and
    /// stay where they are.
    pub fn shift_down(&mut self) {
        let next = match self.position {
            GearPosition::Parking => GearPosition::Reverse,
            GearPosition::Reverse => GearPosition::Neutral,
            GearPosition::Neutral => GearPosition::Drive,
            GearPosition::Drive => GearPosition::Third,
            GearPosition::Third => GearPosition::Second,
            GearPosition::Second | GearPosition::First => GearPosition::First,
            manual => return self.ignore(manual),
        };
        self.transition(next);
    }

    /// Step one position up the automatic ladder. Saturates at Parking.
    pub fn shift_up(&mut self) {
        let next = match self.position {
            GearPosition::First => GearPosition::Second,
            GearPosition::Second => GearPosition::Third,
            GearPosition::Third => GearPosition::Drive,
            GearPosition::Drive => GearPosition::Neutral,
            GearPosition::Neutral => GearPosition::Reverse,
            GearPosition::Reverse | GearPosition::Parking => GearPosition::Parking,
            manual => return self.ignore(manual),
        };
        self.transition(next);
    }

    /// Jump directly to a manual gate position.
    pub fn set_manual(&mut self, target: ManualTarget) {
        self.transition(target.position());
    }

    fn transition(&mut self, next: GearPosition) {
        if next != self.position {
            debug!(from = ?self.position, to = ?next, "gear change");
        }
        // No-op transitions still record the previous position.
        self.previous = self.position;
        self.position = next;
    }

    fn ignore(&self, position: GearPosition) {
        debug!(?position, "automatic shift ignored in manual gear");
    }

    /// Current gear position.
    #[inline]
    pub fn position(&self) -> GearPosition {
        self.position
    }

    /// Position before the most recent transition.
    #[inline]
    pub fn previous(&self) -> GearPosition {
        self.previous
    }

    /// External shift code of the current position.
    #[inline]
    pub fn value(&self) -> i32 {
        self.position.shift_value()
    }

    /// Shift mode code. Always [`SHIFT_MODE_NORMAL`].
    #[inline]
    pub fn mode(&self) -> i32 {
        SHIFT_MODE_NORMAL
    }

    /// True in Reverse.
    pub fn is_reverse(&self) -> bool {
        self.position == GearPosition::Reverse
    }

    /// True in Neutral.
    pub fn is_neutral(&self) -> bool {
        self.position == GearPosition::Neutral
    }

    /// True in Parking.
    pub fn is_parking(&self) -> bool {
        self.position == GearPosition::Parking
    }

    /// True when the transition into the current position came from Reverse.
    pub fn was_reverse(&self) -> bool {
        self.previous == GearPosition::Reverse
    }
}
