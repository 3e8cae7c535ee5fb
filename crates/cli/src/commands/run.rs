//! `carsimd run`

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use carsim_config::SimulatorConfig;
use carsim_service::{input_channel, run_loop};
use carsim_telemetry::signal_channel;
use tracing::info;

use crate::error::CliError;
use crate::output;
use crate::script::{load_script, replay, script_length, wait_until};

/// Run time added after the last scripted event when no duration is given.
const DEFAULT_TAIL: Duration = Duration::from_secs(1);

pub fn execute(config_path: Option<&Path>, script_path: &Path, duration_ms: Option<u64>, json: bool) -> Result<()> {
    let config = match config_path {
        Some(path) => SimulatorConfig::load_from_path(path).map_err(CliError::from)?,
        None => SimulatorConfig::default(),
    };
    let steps = load_script(script_path)?;
    let duration = duration_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| script_length(&steps).saturating_add(DEFAULT_TAIL));
    info!(steps = steps.len(), duration_ms = duration.as_millis(), "starting run");

    let (events, inputs) = input_channel(config.input_queue_capacity);
    let (mut signals, transport) = signal_channel(config.signal_queue_capacity);
    let stop = Arc::new(AtomicBool::new(false));
    let start = Instant::now();

    // Holds the input sender until the run is over so the loop ends on the
    // stop flag rather than on disconnect.
    let producer = {
        let stop = Arc::clone(&stop);
        thread::Builder::new()
            .name("carsim-input".into())
            .spawn(move || {
                let sent = replay(&steps, start, &events, &stop);
                if let Some(end) = start.checked_add(duration) {
                    wait_until(end, &stop);
                }
                stop.store(true, Ordering::Release);
                sent
            })
            .map_err(|e| CliError::Thread(format!("spawn input thread: {e}")))?
    };

    let consumer = thread::Builder::new()
        .name("carsim-transport".into())
        .spawn(move || {
            let mut count = 0u64;
            for signal in transport.iter() {
                output::print_signal(start.elapsed().as_millis(), &signal, json);
                count = count.saturating_add(1);
            }
            count
        })
        .map_err(|e| CliError::Thread(format!("spawn transport thread: {e}")))?;

    let summary = run_loop(&config, &inputs, &mut signals, &stop);
    let dropped = signals.dropped();
    drop(signals);

    let sent = producer
        .join()
        .map_err(|e| CliError::Thread(format!("input thread panicked: {e:?}")))?;
    let printed = consumer
        .join()
        .map_err(|e| CliError::Thread(format!("transport thread panicked: {e:?}")))?;
    info!(sent, printed, dropped, "run finished");

    output::print_run_summary(&summary, printed, dropped, json);
    Ok(())
}
