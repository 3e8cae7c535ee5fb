//! carsimd - CarSim vehicle simulator daemon
//!
//! Replays a scripted joystick timeline into the control loop and prints
//! every signal the simulator publishes.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;
mod script;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "carsimd")]
#[command(about = "CarSim - vehicle dynamics and dead-reckoning telemetry simulator")]
#[command(version)]
#[command(long_about = "
carsimd drives the CarSim vehicle model from a scripted input timeline.
Axis and button events are replayed on their own thread into the control
loop; published signals are printed as they leave the signal queue.
Use --json for one JSON object per line.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(long, global = true, help = "Output in JSON format for machine parsing")]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulator against a scripted input timeline
    Run {
        /// Simulator configuration (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Input script: a list of `{ at_ms, event }` steps (YAML or JSON)
        #[arg(short, long)]
        script: PathBuf,

        /// Stop after this many milliseconds (default: one second past the
        /// last scripted event)
        #[arg(long)]
        duration_ms: Option<u64>,
    },

    /// Load and validate a configuration, then print the effective values
    CheckConfig {
        /// Simulator configuration (YAML or JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            let code = e
                .downcast_ref::<CliError>()
                .map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn execute_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Run {
            config,
            script,
            duration_ms,
        } => commands::run::execute(config.as_deref(), script, *duration_ms, cli.json),
        Commands::CheckConfig { config } => commands::check_config::execute(config, cli.json),
    }
}
