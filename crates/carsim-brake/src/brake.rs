//! Brake state

use carsim_filters::IntAverageFilter;
use tracing::debug;

use crate::types::{BrakeIntensity, SpeedBand, reduction_factor};
use crate::{LAG_BRAKE, MAX_BRAKE};

/// Map a raw brake count onto 0-100, truncated. Zero at or below the lag.
pub fn calc_pressure(raw: i32) -> i32 {
    if raw <= LAG_BRAKE {
        return 0;
    }
    let travel = f64::from(raw - LAG_BRAKE) / f64::from(MAX_BRAKE - LAG_BRAKE);
    (travel * 100.0) as i32
}

/// Smoothed brake state.
#[derive(Debug, Clone)]
pub struct Brake {
    value: i32,
    on_brake: bool,
    filter: IntAverageFilter,
}

impl Brake {
    /// Released brake averaging over the last `samples` inputs.
    ///
    /// A window of zero is raised to one.
    pub fn new(samples: usize) -> Self {
        Self {
            value: 0,
            on_brake: false,
            filter: IntAverageFilter::new(samples),
        }
    }

    /// Feed one raw brake sample (0-65535).
    pub fn chg_brake(&mut self, raw: i32) {
        self.filter.push(raw);
        self.value = self.filter.int_average();
        let on_brake = self.value > LAG_BRAKE;
        if on_brake != self.on_brake {
            debug!(brake_value = self.value, on_brake, "brake state changed");
        }
        self.on_brake = on_brake;
    }

    /// True while the smoothed value exceeds [`LAG_BRAKE`].
    #[inline]
    pub fn is_on_brake(&self) -> bool {
        self.on_brake
    }

    /// Smoothed brake value.
    #[inline]
    pub fn brake_avg(&self) -> i32 {
        self.value
    }

    /// Current braking intensity, or `None` when released.
    pub fn intensity(&self) -> Option<BrakeIntensity> {
        self.on_brake.then(|| BrakeIntensity::from_value(self.value))
    }

    /// Apply braking to an engine-derived target speed.
    pub fn speed(&self, source: f64) -> f64 {
        let Some(intensity) = self.intensity() else {
            return source;
        };
        if source < intensity.stop_floor() {
            return 0.0;
        }
        let factor = reduction_factor(SpeedBand::from_speed(source), intensity);
        source - source * factor
    }
}

impl Default for Brake {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BRAKE_SAMPLES)
    }
}
