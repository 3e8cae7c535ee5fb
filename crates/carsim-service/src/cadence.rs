//! Publishing cadence.
//!
//! A phase counter advances modulo 3 once per cycle interval. Phase 1 is a
//! fast cycle, phase 2 is a fast and slow cycle, phase 0 publishes nothing
//! periodic. Ticks between deadlines are idle.

use std::time::{Duration, Instant};

/// Which periodic signal groups are due on this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Idle,
    /// Brake pressure, road speed, heading and location.
    Fast,
    /// Fast group plus engine speed, pedal opening and steering angle.
    Full,
}

impl Cycle {
    pub fn is_fast(self) -> bool {
        matches!(self, Self::Fast | Self::Full)
    }

    pub fn is_slow(self) -> bool {
        matches!(self, Self::Full)
    }
}

#[derive(Debug, Clone)]
pub struct TickCadence {
    interval: Duration,
    deadline: Option<Instant>,
    phase: u8,
}

impl TickCadence {
    /// A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            deadline: None,
            phase: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Classify the tick at `now`.
    ///
    /// The first call arms the first deadline one interval later. A tick
    /// that lands more than one interval past its deadline resynchronises
    /// to `now` instead of replaying the missed cycles.
    pub fn advance(&mut self, now: Instant) -> Cycle {
        let Some(deadline) = self.deadline else {
            self.deadline = now.checked_add(self.interval);
            return Cycle::Idle;
        };
        if now < deadline {
            return Cycle::Idle;
        }

        self.phase = (self.phase + 1) % 3;
        let next = deadline.checked_add(self.interval);
        self.deadline = match next {
            Some(next) if next > now => Some(next),
            _ => now.checked_add(self.interval),
        };

        match self.phase {
            1 => Cycle::Fast,
            2 => Cycle::Full,
            _ => Cycle::Idle,
        }
    }
}
