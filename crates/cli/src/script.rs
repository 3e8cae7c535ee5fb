//! Scripted input timelines.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use carsim_config::ConfigFormat;
use carsim_service::InputEvent;
use crossbeam::channel::Sender;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::CliError;

/// Longest single sleep while waiting for the next step, so a raised stop
/// flag is noticed promptly.
const POLL: Duration = Duration::from_millis(20);

/// One timed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    /// Offset from the start of the run.
    pub at_ms: u64,
    pub event: InputEvent,
}

/// Load a script and order it by time. Steps sharing a timestamp keep
/// their file order.
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>, CliError> {
    let mut steps: Vec<ScriptStep> = ConfigFormat::read_file(path)?;
    if steps.is_empty() {
        return Err(CliError::Script(format!("{} has no steps", path.display())));
    }
    steps.sort_by_key(|step| step.at_ms);
    Ok(steps)
}

/// Offset of the last step.
pub fn script_length(steps: &[ScriptStep]) -> Duration {
    Duration::from_millis(steps.last().map_or(0, |step| step.at_ms))
}

/// Sleep until `deadline` or until `stop` is raised. Returns false if stopped.
pub fn wait_until(deadline: Instant, stop: &AtomicBool) -> bool {
    loop {
        if stop.load(Ordering::Acquire) {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        std::thread::sleep(deadline.saturating_duration_since(now).min(POLL));
    }
}

/// Send each step at its offset from `start`. Returns the number sent.
pub fn replay(steps: &[ScriptStep], start: Instant, events: &Sender<InputEvent>, stop: &AtomicBool) -> usize {
    let mut sent = 0usize;
    for step in steps {
        let Some(deadline) = start.checked_add(Duration::from_millis(step.at_ms)) else {
            break;
        };
        if !wait_until(deadline, stop) {
            break;
        }
        if events.send(step.event).is_err() {
            warn!("control loop stopped reading input");
            break;
        }
        sent = sent.saturating_add(1);
    }
    debug!(sent, total = steps.len(), "script replay finished");
    sent
}
