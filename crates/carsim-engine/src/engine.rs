//! Engine state and throttle handling.

use carsim_filters::AverageFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default RPM filter window.
pub const DEFAULT_RPM_SAMPLES: usize = 40;

/// Idle RPM basis substituted when the smoothed throttle drops too low.
pub const IDLING_RPM: f64 = 6.3;

/// Smoothed RPM basis below which the idle value is substituted.
pub const RPM_BOTTOM_BORDER: f64 = 2.7;

/// RPM basis seeded when the integrator auto-ignites the engine.
pub const IGNITION_RPM: f64 = 4.1;

/// Raw throttle count mapped to 100%.
pub const THROTTLE_FULL_SCALE: f64 = 65534.0;

/// Map a raw throttle count onto the 0-100 scale.
#[inline]
pub fn throttle_to_percent(raw: i32) -> f64 {
    f64::from(raw) / THROTTLE_FULL_SCALE * 100.0
}

/// Engine model.
///
/// An inactive engine ignores throttle samples until
/// [`ignition_start`](Self::ignition_start) is called.
#[derive(Debug)]
pub struct Engine {
    active: bool,
    rpm: f64,
    filter: AverageFilter,
    rng: StdRng,
}

impl Engine {
    /// Create an engine with an RPM filter of `samples` slots and an
    /// OS-seeded jitter source.
    pub fn new(samples: usize) -> Self {
        Self::with_rng(samples, StdRng::from_os_rng())
    }

    /// Create an engine whose idle jitter is reproducible.
    pub fn with_seed(samples: usize, seed: u64) -> Self {
        Self::with_rng(samples, StdRng::seed_from_u64(seed))
    }

    fn with_rng(samples: usize, rng: StdRng) -> Self {
        Self {
            active: false,
            rpm: 0.0,
            filter: AverageFilter::new(samples),
            rng,
        }
    }

    /// Mark the engine as running, optionally seeding the RPM basis.
    pub fn ignition_start(&mut self, rpm: Option<f64>) {
        self.active = true;
        if let Some(rpm) = rpm {
            self.rpm = rpm;
        }
        debug!(rpm_basis = self.rpm, "engine ignition");
    }

    /// Feed one raw throttle sample (0-65535).
    pub fn chg_throttle(&mut self, raw: i32) {
        if !self.active {
            return;
        }
        self.filter.push(throttle_to_percent(raw));
        self.rpm = self.filter.average();
        if self.rpm < RPM_BOTTOM_BORDER {
            self.rpm = IDLING_RPM + self.rng.random::<f64>();
        }
    }

    /// Whether the engine is running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Displayed engine speed (RPM basis x 100).
    #[inline]
    pub fn rpm(&self) -> f64 {
        self.rpm * 100.0
    }

    /// Raw smoothed throttle average, before the idle substitution.
    #[inline]
    pub fn avg_rpm(&self) -> f64 {
        self.filter.average()
    }
}
