//! Top-level simulator configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use carsim_errors::ConfigError;
use carsim_geodesy::GeoPoint;
use carsim_vehicle::SampleSizes;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::format::ConfigFormat;
use crate::input::InputBindings;
use crate::route::read_route;

/// Default dead-reckoning start point.
pub const DEFAULT_START: GeoPoint = GeoPoint::new(35.47945, 139.40026);

/// Complete simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Filter window sizes.
    pub sample_sizes: SampleSizes,
    /// Position at startup and after a demo route restarts.
    pub start_position: GeoPoint,
    /// Heading at startup, degrees clockwise from north.
    pub initial_heading_deg: f64,
    /// Clamp applied to the published road speed.
    pub max_speed_kmh: u32,
    /// Outer loop poll period.
    pub tick_interval_ms: u64,
    /// Publishing cadence unit; the phase counter advances once per interval.
    pub cycle_interval_ms: u64,
    /// Wheelbase used by the heading update.
    pub wheelbase_m: f64,
    /// Position comes from an external receiver; skip dead-reckoned location.
    pub use_external_position: bool,
    /// Device bindings.
    pub input: InputBindings,
    /// Demo route waypoints. Empty disables route following.
    pub route: Vec<GeoPoint>,
    /// Route file appended after `route` at load time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_file: Option<PathBuf>,
    /// Capacity of the outbound signal queue.
    pub signal_queue_capacity: usize,
    /// Capacity of the inbound device event queue.
    pub input_queue_capacity: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sample_sizes: SampleSizes::default(),
            start_position: DEFAULT_START,
            initial_heading_deg: 0.0,
            max_speed_kmh: 180,
            tick_interval_ms: 10,
            cycle_interval_ms: 50,
            wheelbase_m: 3.0,
            use_external_position: false,
            input: InputBindings::default(),
            route: Vec::new(),
            route_file: None,
            signal_queue_capacity: 256,
            input_queue_capacity: 256,
        }
    }
}

impl SimulatorConfig {
    /// Parse a document without touching the filesystem.
    ///
    /// `route_file` is not resolved here; use [`load_from_path`](Self::load_from_path).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        format.deserialize(content, Path::new("<inline>"))
    }

    /// Load, resolve the route file and validate.
    ///
    /// A relative `route_file` is resolved against the config file's
    /// directory and its waypoints are appended to `route`.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading, parsing or validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config: Self = ConfigFormat::read_file(path)?;

        if let Some(route_file) = config.route_file.take() {
            let resolved = if route_file.is_relative() {
                path.parent().unwrap_or_else(|| Path::new("")).join(&route_file)
            } else {
                route_file
            };
            let waypoints = read_route(&resolved)?;
            debug!(path = %resolved.display(), waypoints = waypoints.len(), "loaded route file");
            config.route.extend(waypoints);
            config.route_file = Some(resolved);
        }

        config.validate()?;
        info!(
            path = %path.display(),
            route_waypoints = config.route.len(),
            "loaded simulator config"
        );
        Ok(config)
    }

    /// Check that the simulator can run with these values.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = &self.sample_sizes;
        for (field, size) in [
            ("sample_sizes.rpm", sizes.rpm),
            ("sample_sizes.speed", sizes.speed),
            ("sample_sizes.brake", sizes.brake),
            ("sample_sizes.accelerator_pedal", sizes.accelerator_pedal),
        ] {
            if size == 0 {
                return Err(ConfigError::invalid(field, "must be at least 1"));
            }
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be positive"));
        }
        if self.cycle_interval_ms == 0 {
            return Err(ConfigError::invalid("cycle_interval_ms", "must be positive"));
        }
        if !(self.wheelbase_m.is_finite() && self.wheelbase_m > 0.0) {
            return Err(ConfigError::invalid(
                "wheelbase_m",
                format!("must be a positive length, got {}", self.wheelbase_m),
            ));
        }
        if self.max_speed_kmh == 0 {
            return Err(ConfigError::invalid("max_speed_kmh", "must be positive"));
        }
        if !self.initial_heading_deg.is_finite() {
            return Err(ConfigError::invalid("initial_heading_deg", "must be finite"));
        }
        if !self.start_position.is_valid() {
            return Err(ConfigError::invalid(
                "start_position",
                format!(
                    "({}, {}) is outside latitude [-90, 90] / longitude [-180, 180]",
                    self.start_position.lat, self.start_position.lng
                ),
            ));
        }
        if let Some(index) = self.route.iter().position(|p| !p.is_valid()) {
            return Err(ConfigError::invalid(
                format!("route[{index}]"),
                "coordinate out of range",
            ));
        }
        if self.signal_queue_capacity == 0 {
            return Err(ConfigError::invalid("signal_queue_capacity", "must be at least 1"));
        }
        if self.input_queue_capacity == 0 {
            return Err(ConfigError::invalid("input_queue_capacity", "must be at least 1"));
        }
        if let Some((field, other)) = self.input.first_duplicate() {
            return Err(ConfigError::invalid(field, format!("same number as {other}")));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn cycle_interval(&self) -> Duration {
        Duration::from_millis(self.cycle_interval_ms)
    }

    /// True when a demo route is configured.
    pub fn has_route(&self) -> bool {
        !self.route.is_empty()
    }
}
