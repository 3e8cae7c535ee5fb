//! The control loop thread body.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use carsim_config::SimulatorConfig;
use carsim_telemetry::SignalSink;
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use tracing::{debug, info};

use crate::input::InputEvent;
use crate::simulator::Simulator;

/// Bounded queue from the device layer into the control loop.
///
/// A capacity of zero is raised to one.
pub fn input_channel(capacity: usize) -> (Sender<InputEvent>, Receiver<InputEvent>) {
    channel::bounded(capacity.max(1))
}

/// Why the loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The stop flag was raised.
    Stopped,
    /// Every input sender was dropped.
    InputsClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub ticks: u64,
    pub events: u64,
    pub exit: LoopExit,
}

/// Build a [`Simulator`] from `config` and run it until stopped.
pub fn run_loop<S: SignalSink + ?Sized>(
    config: &SimulatorConfig,
    inputs: &Receiver<InputEvent>,
    sink: &mut S,
    stop: &AtomicBool,
) -> LoopSummary {
    let mut simulator = Simulator::new(config);
    run_simulator(&mut simulator, config.tick_interval(), inputs, sink, stop)
}

/// Tick `simulator` every `tick_interval` until `stop` is set or the input
/// channel disconnects.
///
/// Each iteration drains every queued input event without blocking, then
/// ticks once. Events still queued when the senders disconnect are applied
/// before the final tick.
pub fn run_simulator<S: SignalSink + ?Sized>(
    simulator: &mut Simulator,
    tick_interval: Duration,
    inputs: &Receiver<InputEvent>,
    sink: &mut S,
    stop: &AtomicBool,
) -> LoopSummary {
    info!(tick_ms = tick_interval.as_millis(), "control loop started");
    let mut ticks = 0u64;
    let mut events = 0u64;

    let exit = loop {
        if stop.load(Ordering::Acquire) {
            break LoopExit::Stopped;
        }

        let mut closed = false;
        loop {
            match inputs.try_recv() {
                Ok(event) => {
                    events = events.saturating_add(1);
                    simulator.handle_input(event, sink);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    closed = true;
                    break;
                }
            }
        }

        simulator.tick(Instant::now(), sink);
        ticks = ticks.saturating_add(1);

        if closed {
            debug!("input channel disconnected");
            break LoopExit::InputsClosed;
        }
        std::thread::sleep(tick_interval);
    };

    info!(ticks, events, ?exit, odometer_m = simulator.integrator().total_run(), "control loop stopped");
    LoopSummary { ticks, events, exit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carsim_telemetry::{RecordingSink, SignalKind};

    #[test]
    fn test_preset_stop_runs_no_ticks() {
        let (_tx, rx) = input_channel(4);
        let stop = AtomicBool::new(true);
        let mut sink = RecordingSink::new();
        let summary = run_loop(&SimulatorConfig::default(), &rx, &mut sink, &stop);
        assert_eq!(summary.exit, LoopExit::Stopped);
        assert_eq!(summary.ticks, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_queued_events_applied_before_disconnect_exit() -> Result<(), Box<dyn std::error::Error>> {
        let (tx, rx) = input_channel(4);
        tx.send(InputEvent::Button { number: 4, pressed: true })?;
        tx.send(InputEvent::Button { number: 10, pressed: true })?;
        drop(tx);

        let stop = AtomicBool::new(false);
        let mut sink = RecordingSink::new();
        let summary = run_loop(&SimulatorConfig::default(), &rx, &mut sink, &stop);

        assert_eq!(summary.exit, LoopExit::InputsClosed);
        assert_eq!(summary.events, 2);
        assert_eq!(summary.ticks, 1);
        assert_eq!(sink.count_of(SignalKind::TurnSignal), 1);
        assert_eq!(sink.count_of(SignalKind::Shift), 1);
        Ok(())
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let (tx, _rx) = input_channel(0);
        assert_eq!(tx.capacity(), Some(1));
    }
}
