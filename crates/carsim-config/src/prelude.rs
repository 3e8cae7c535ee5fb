//! Prelude for the config crate.

pub use crate::format::ConfigFormat;
pub use crate::input::{InputBindings, ShifterKind};
pub use crate::route::parse_route;
pub use crate::simulator::SimulatorConfig;
pub use carsim_errors::ConfigError;
