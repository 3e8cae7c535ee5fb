//! Per-tick speed and distance integration.

use std::time::Instant;

use carsim_brake::{Brake, calc_pressure};
use carsim_engine::{Engine, IGNITION_RPM, RPM_BOTTOM_BORDER};
use carsim_filters::{AverageFilter, IntAverageFilter};
use carsim_transmission::{DRIVE_BAND_LIMITS, ManualTarget, Transmission};
use tracing::{debug, trace};

use crate::samples::SampleSizes;

/// Resting position of a throttle or brake axis.
pub const AXIS_CENTER: i32 = 32767;

/// Pedal filter value reported as 100% open.
pub const ACC_PEDAL_FULL_SCALE: f64 = 65534.0;

/// Fold a raw axis count around its resting position: `|raw - 32767|`.
#[inline]
pub fn invert_axis(raw: i32) -> i32 {
    let folded = (i64::from(raw) - i64::from(AXIS_CENTER)).abs();
    i32::try_from(folded).unwrap_or(i32::MAX)
}

/// Extra pushes while accelerating below the last Drive band edge.
const ACCEL_EXTRA_PUSHES: usize = 2;

/// Extra pushes when braking to a stop from the lowest Drive band.
const STOP_EXTRA_PUSHES: usize = 4;

/// Composite vehicle model.
///
/// Owns every piece of simulated state. Not shared between threads: the
/// control loop that created it is its only caller.
#[derive(Debug)]
pub struct VehicleIntegrator {
    engine: Engine,
    brake: Brake,
    transmission: Transmission,
    speed: AverageFilter,
    acc_pedal: IntAverageFilter,
    odometer: f64,
    tripmeter: f64,
    current_run: f64,
    last_tick: Option<Instant>,
    throttle_changed: bool,
    last_throttle: Option<i32>,
    brake_changed: bool,
    last_brake: Option<i32>,
    moving: bool,
}

impl VehicleIntegrator {
    /// Create an integrator with an OS-seeded engine idle jitter.
    pub fn new(sizes: SampleSizes) -> Self {
        Self::from_engine(sizes, Engine::new(sizes.rpm))
    }

    /// Create an integrator whose engine idle jitter is reproducible.
    pub fn with_seed(sizes: SampleSizes, seed: u64) -> Self {
        Self::from_engine(sizes, Engine::with_seed(sizes.rpm, seed))
    }

    fn from_engine(sizes: SampleSizes, engine: Engine) -> Self {
        Self {
            engine,
            brake: Brake::new(sizes.brake),
            transmission: Transmission::new(),
            speed: AverageFilter::new(sizes.speed),
            acc_pedal: IntAverageFilter::new(sizes.accelerator_pedal),
            odometer: 0.0,
            tripmeter: 0.0,
            current_run: 0.0,
            last_tick: None,
            throttle_changed: false,
            last_throttle: None,
            brake_changed: false,
            last_brake: None,
            moving: false,
        }
    }

    /// Apply a raw throttle axis sample.
    ///
    /// While the engine is off the sample only primes the pedal filter, and
    /// the engine is ignited when the gear is in Neutral or Parking.
    pub fn chg_throttle(&mut self, raw: i32) {
        let x = invert_axis(raw);
        if !self.engine.is_active() {
            if self.transmission.is_neutral() || self.transmission.is_parking() {
                self.engine.ignition_start(Some(IGNITION_RPM));
            }
            self.acc_pedal.fill(x);
            return;
        }
        self.engine.chg_throttle(x);
        self.acc_pedal.push(x);
        self.throttle_changed = true;
        self.last_throttle = Some(x);
    }

    /// Apply a raw brake axis sample.
    pub fn chg_brake(&mut self, raw: i32) {
        let x = invert_axis(raw);
        self.brake.chg_brake(x);
        self.brake_changed = true;
        self.last_brake = Some(x);
    }

    /// Per-tick update using the current monotonic time.
    pub fn update_avg(&mut self) {
        self.update_avg_at(Instant::now());
    }

    /// Per-tick update at an explicit point in time.
    ///
    /// Replays the last throttle and brake samples when none arrived since
    /// the previous tick, then runs [`calc_at`](Self::calc_at).
    pub fn update_avg_at(&mut self, now: Instant) {
        if !self.throttle_changed
            && let Some(x) = self.last_throttle
        {
            self.engine.chg_throttle(x);
            self.acc_pedal.push(x);
        }
        self.throttle_changed = false;
        if !self.brake_changed
            && let Some(x) = self.last_brake
        {
            self.brake.chg_brake(x);
        }
        self.brake_changed = false;
        self.calc_at(now);
    }

    /// Integrate speed and distance using the current monotonic time.
    pub fn calc(&mut self) {
        self.calc_at(Instant::now());
    }

    /// Integrate speed and distance at an explicit point in time.
    pub fn calc_at(&mut self, now: Instant) {
        let [stop_band, _, _, accel_limit] = DRIVE_BAND_LIMITS;
        let old = self.speed();
        let downshifting = self.engine.avg_rpm() < RPM_BOTTOM_BORDER;
        let ratio = self.transmission.gear_ratio(old, downshifting);
        let target = self.brake.speed(self.engine.rpm() * ratio / 100.0);

        self.speed.push(target);
        if old < target && target < accel_limit {
            self.speed.push_repeated(target, ACCEL_EXTRA_PUSHES);
        }
        let stopped = target.abs() < f64::EPSILON;
        if self.brake.is_on_brake() && old >= target && old < stop_band && stopped {
            self.speed.push_repeated(target, STOP_EXTRA_PUSHES);
        }
        if stopped {
            self.speed.recompute();
        }

        let speed = self.speed();
        let elapsed = self
            .last_tick
            .replace(now)
            .map_or(0.0, |prev| now.saturating_duration_since(prev).as_secs_f64());

        if speed.abs() < f64::EPSILON {
            self.current_run = 0.0;
            if self.moving {
                debug!(odometer_m = self.odometer, "vehicle stopped");
                self.moving = false;
            }
            return;
        }
        if !self.moving {
            debug!(gear = ?self.transmission.position(), "vehicle moving");
            self.moving = true;
        }

        let mut run = speed / 3600.0 * 1000.0 * elapsed;
        if self.transmission.is_reverse()
            || (self.transmission.is_neutral() && self.transmission.was_reverse())
        {
            run = -run;
        }
        self.current_run = run;
        self.tripmeter += run;
        self.odometer += run;
        trace!(speed_kmh = speed, run_m = run, "integrated tick");
    }

    /// Step one position down the automatic ladder.
    pub fn shift_down(&mut self) {
        self.transmission.shift_down();
    }

    /// Step one position up the automatic ladder.
    pub fn shift_up(&mut self) {
        self.transmission.shift_up();
    }

    /// Jump to a manual gate position.
    pub fn set_manual(&mut self, target: ManualTarget) {
        self.transmission.set_manual(target);
    }

    /// Current gear state.
    #[inline]
    pub fn transmission(&self) -> &Transmission {
        &self.transmission
    }

    /// Averaged road speed in km/h.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed.average()
    }

    /// Displayed engine speed.
    #[inline]
    pub fn rpm(&self) -> f64 {
        self.engine.rpm()
    }

    /// Whether the engine has been ignited.
    #[inline]
    pub fn is_engine_active(&self) -> bool {
        self.engine.is_active()
    }

    /// Whether the smoothed brake exceeds the lag threshold.
    #[inline]
    pub fn is_on_brake(&self) -> bool {
        self.brake.is_on_brake()
    }

    /// Smoothed brake value.
    #[inline]
    pub fn brake_avg(&self) -> i32 {
        self.brake.brake_avg()
    }

    /// Brake pressure (0-100) for a brake value.
    #[inline]
    pub fn calc_pressure(&self, brake_value: i32) -> i32 {
        calc_pressure(brake_value)
    }

    /// Accelerator pedal opening, 0-100 truncated.
    pub fn calc_acc_pedal_open(&self) -> i32 {
        let open = f64::from(self.acc_pedal.int_average()) / ACC_PEDAL_FULL_SCALE;
        (open * 100.0) as i32
    }

    /// Signed distance in metres since the last tripmeter reset.
    #[inline]
    pub fn tripmeter(&self) -> f64 {
        self.tripmeter
    }

    /// Zero the tripmeter.
    pub fn tripmeter_reset(&mut self) {
        self.tripmeter = 0.0;
    }

    /// Signed distance covered by the most recent tick.
    #[inline]
    pub fn current_run(&self) -> f64 {
        self.current_run
    }

    /// Signed distance covered since creation.
    #[inline]
    pub fn total_run(&self) -> f64 {
        self.odometer
    }
}
