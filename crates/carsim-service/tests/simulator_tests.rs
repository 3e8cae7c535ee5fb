//! Whole-simulator scenarios on a synthetic clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use carsim_config::SimulatorConfig;
use carsim_geodesy::GeoPoint;
use carsim_service::prelude::*;
use carsim_telemetry::{RecordingSink, SignalKind, SignalSink, VehicleSignal, signal_channel};

const STEP: Duration = Duration::from_millis(50);

fn axis(number: u32, value: i32) -> InputEvent {
    InputEvent::Axis { number, value }
}

fn press(number: u32) -> InputEvent {
    InputEvent::Button { number, pressed: true }
}

/// Ignite in Parking, then walk the ladder down `shifts` positions.
fn ready(config: &SimulatorConfig, shifts: usize, sink: &mut RecordingSink) -> Simulator {
    let mut sim = Simulator::with_seed(config, 3);
    sim.handle_input(axis(config.input.accelerator_axis, 0), sink);
    for _ in 0..shifts {
        sim.handle_input(press(config.input.shift_down_button), sink);
    }
    sim
}

fn drive(sim: &mut Simulator, sink: &mut RecordingSink, ticks: u32, throttle_axis: u32) {
    let mut now = Instant::now();
    for _ in 0..ticks {
        sim.handle_input(axis(throttle_axis, 32767), sink);
        sim.tick(now, sink);
        now += STEP;
    }
}

#[test]
fn straight_drive_north_moves_latitude_only() {
    let config = SimulatorConfig::default();
    let mut sink = RecordingSink::new();
    let mut sim = ready(&config, 3, &mut sink);
    drive(&mut sim, &mut sink, 2000, config.input.accelerator_axis);

    let start = config.start_position;
    let position = sim.position();
    assert!(position.lat > start.lat, "did not move north: {position:?}");
    assert!((position.lng - start.lng).abs() < 1e-9);
    assert_eq!(sim.heading().whole_degrees(), 0);

    // Displacement tracks the integrated distance within the last unconsumed tick.
    let metres_north = (position.lat - start.lat) * 111_000.0;
    let odometer = sim.integrator().total_run();
    assert_relative_eq!(metres_north, odometer, max_relative = 0.02);

    for signal in sink.of_kind(SignalKind::Velocity) {
        if let VehicleSignal::Velocity(v) = signal {
            assert!((0..=180).contains(v), "velocity {v} out of range");
        }
    }
    assert_eq!(sink.count_of(SignalKind::Direction), 1);
    assert!(sink.count_of(SignalKind::Location) > 10);
}

#[test]
fn reverse_moves_backwards() {
    let config = SimulatorConfig::default();
    let mut sink = RecordingSink::new();
    let mut sim = ready(&config, 1, &mut sink);
    drive(&mut sim, &mut sink, 400, config.input.accelerator_axis);

    assert!(sim.integrator().total_run() < 0.0);
    assert!(sim.position().lat < config.start_position.lat);
    assert_eq!(
        sink.last_of(SignalKind::Shift),
        Some(&VehicleSignal::Shift(carsim_telemetry::GearSignal { position: 1, value: 128, mode: 0 }))
    );
}

#[test]
fn steering_turns_heading_clockwise() {
    let config = SimulatorConfig::default();
    let mut sink = RecordingSink::new();
    let mut sim = ready(&config, 3, &mut sink);
    sim.handle_input(axis(config.input.steering_axis, 20000), &mut sink);
    drive(&mut sim, &mut sink, 600, config.input.accelerator_axis);

    assert!(sink.count_of(SignalKind::Direction) > 1);
    assert_eq!(sim.steering().delta_deg(), 3);
    assert_eq!(
        sink.last_of(SignalKind::Steering),
        Some(&VehicleSignal::Steering(carsim_service::display_angle(20000)))
    );
}

#[test]
fn external_position_skips_location_updates() {
    let config = SimulatorConfig {
        use_external_position: true,
        ..SimulatorConfig::default()
    };
    let mut sink = RecordingSink::new();
    let mut sim = ready(&config, 3, &mut sink);
    drive(&mut sim, &mut sink, 600, config.input.accelerator_axis);

    assert_eq!(sim.position(), config.start_position);
    assert_eq!(sink.count_of(SignalKind::Location), 1);
    assert!(sink.count_of(SignalKind::Direction) >= 1);
}

#[test]
fn route_mode_loops_back_to_start() {
    let start = SimulatorConfig::default().start_position;
    let config = SimulatorConfig {
        route: vec![GeoPoint::new(start.lat, start.lng + 0.003)],
        ..SimulatorConfig::default()
    };
    let mut sink = RecordingSink::new();
    let mut sim = ready(&config, 3, &mut sink);
    drive(&mut sim, &mut sink, 2000, config.input.accelerator_axis);

    let laps = sim.route().map_or(0, RouteFollower::laps);
    assert!(laps >= 1, "never completed the route");
    // The geodesic bends slightly south of the waypoint's parallel, so the
    // bearing sits just under 90 and truncates to 89.
    assert_abs_diff_eq!(sim.heading().degrees(), 90.0, epsilon = 0.05);
    assert!(
        matches!(
            sink.last_of(SignalKind::Direction),
            Some(VehicleSignal::Direction(89 | 90))
        ),
        "last direction {:?}",
        sink.last_of(SignalKind::Direction)
    );
    // Every lap jumps back to the start, which republishes its location.
    let start_location = VehicleSignal::Location(start.to_location());
    let returns = sink.of_kind(SignalKind::Location).filter(|s| **s == start_location).count();
    assert!(returns >= 2, "start location published {returns} times");
}

/// Refuses every signal while closed, like a full signal queue.
struct GatedSink {
    open: bool,
    delivered: RecordingSink,
}

impl SignalSink for GatedSink {
    fn publish(&mut self, signal: VehicleSignal) -> bool {
        self.open && self.delivered.publish(signal)
    }
}

#[test]
fn brake_change_lost_by_sink_is_resent() {
    let config = SimulatorConfig::default();
    let mut sink = GatedSink { open: true, delivered: RecordingSink::new() };
    let mut sim = Simulator::with_seed(&config, 3);
    sim.handle_input(axis(config.input.accelerator_axis, 0), &mut sink);

    let mut now = Instant::now();
    sim.tick(now, &mut sink);
    now += STEP;
    assert_eq!(
        sink.delivered.last_of(SignalKind::BrakeSignal),
        Some(&VehicleSignal::BrakeSignal(false))
    );

    sink.open = false;
    for _ in 0..40 {
        sim.handle_input(axis(config.input.brake_axis, 32767), &mut sink);
        sim.tick(now, &mut sink);
        now += STEP;
    }
    assert!(sim.integrator().is_on_brake());
    assert_eq!(sink.delivered.count_of(SignalKind::BrakeSignal), 1);

    sink.open = true;
    sim.tick(now, &mut sink);
    assert_eq!(
        sink.delivered.last_of(SignalKind::BrakeSignal),
        Some(&VehicleSignal::BrakeSignal(true))
    );
    assert_eq!(sink.delivered.count_of(SignalKind::BrakeSignal), 2);
}

#[test]
fn threaded_loop_delivers_through_signal_channel() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulatorConfig {
        tick_interval_ms: 2,
        cycle_interval_ms: 4,
        ..SimulatorConfig::default()
    };
    let (events, inputs) = input_channel(config.input_queue_capacity);
    let (mut signals, transport) = signal_channel(config.signal_queue_capacity);
    let stop = Arc::new(AtomicBool::new(false));

    let consumer = std::thread::spawn(move || transport.iter().collect::<Vec<_>>());
    let producer = {
        let stop = Arc::clone(&stop);
        std::thread::spawn(move || {
            let script = [axis(1, 0), press(10), press(10), press(10), press(4)];
            for event in script {
                if events.send(event).is_err() {
                    return;
                }
                std::thread::sleep(Duration::from_millis(5));
            }
            std::thread::sleep(Duration::from_millis(50));
            stop.store(true, Ordering::Release);
        })
    };

    let summary = run_loop(&config, &inputs, &mut signals, &stop);
    producer.join().map_err(|e| format!("producer panicked: {e:?}"))?;
    drop(signals);
    let received = consumer.join().map_err(|e| format!("consumer panicked: {e:?}"))?;

    assert_eq!(summary.exit, LoopExit::Stopped);
    assert_eq!(summary.events, 5);
    assert!(summary.ticks > 0);
    assert_eq!(received.first().map(VehicleSignal::kind), Some(SignalKind::Location));
    assert!(received.contains(&VehicleSignal::TurnSignal(1)));
    Ok(())
}
