//! `carsimd check-config`

use std::path::Path;

use anyhow::Result;
use carsim_config::{ConfigFormat, SimulatorConfig};

use crate::error::CliError;
use crate::output;

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let config = SimulatorConfig::load_from_path(path).map_err(CliError::from)?;
    let format = if json { ConfigFormat::Json } else { ConfigFormat::Yaml };
    let rendered = format.render(&config).map_err(CliError::from)?;
    output::print_config(&rendered, json);
    Ok(())
}
