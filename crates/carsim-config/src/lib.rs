//! Configuration for the CarSim control loop.
//!
//! [`SimulatorConfig`] is read from YAML or JSON, chosen by file extension.
//! Every field has a default, so an empty document is a valid configuration.
//!
//! ```
//! use carsim_config::{ConfigFormat, SimulatorConfig};
//!
//! let config = SimulatorConfig::parse("max_speed_kmh: 120\n", ConfigFormat::Yaml)?;
//! assert_eq!(config.max_speed_kmh, 120);
//! assert_eq!(config.sample_sizes.speed, 180);
//! config.validate()?;
//! # Ok::<(), carsim_errors::ConfigError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]

pub mod format;
pub mod input;
pub mod prelude;
pub mod route;
pub mod simulator;

pub use format::ConfigFormat;
pub use input::{InputBindings, ShifterKind};
pub use route::parse_route;
pub use simulator::SimulatorConfig;
