//! One simulated vehicle: integrator, dead reckoning and signal publishing.

use std::time::Instant;

use carsim_config::SimulatorConfig;
use carsim_geodesy::{GeoPoint, Heading, azimuth_update, destination_or_fallback};
use carsim_telemetry::{GearSignal, LightState, SignalSink, SignalTracker, VehicleSignal};
use carsim_vehicle::VehicleIntegrator;
use tracing::debug;

use crate::cadence::{Cycle, TickCadence};
use crate::input::{InputAction, InputEvent, InputMapper};
use crate::route::RouteFollower;
use crate::steering::SteeringState;

/// Owns everything one control loop needs for one vehicle.
///
/// Only two entry points mutate it: [`handle_input`](Self::handle_input) for
/// device events and [`tick`](Self::tick) once per loop iteration.
#[derive(Debug)]
pub struct Simulator {
    integrator: VehicleIntegrator,
    mapper: InputMapper,
    cadence: TickCadence,
    tracker: SignalTracker,
    lights: LightState,
    steering: SteeringState,
    heading: Heading,
    position: GeoPoint,
    route: Option<RouteFollower>,
    max_speed_kmh: i32,
    wheelbase_m: f64,
    use_external_position: bool,
    started: bool,
    ticks: u64,
}

impl Simulator {
    /// Build a simulator from a validated configuration.
    pub fn new(config: &SimulatorConfig) -> Self {
        Self::from_parts(config, VehicleIntegrator::new(config.sample_sizes))
    }

    /// Same as [`new`](Self::new) with reproducible engine idle jitter.
    pub fn with_seed(config: &SimulatorConfig, seed: u64) -> Self {
        Self::from_parts(config, VehicleIntegrator::with_seed(config.sample_sizes, seed))
    }

    fn from_parts(config: &SimulatorConfig, integrator: VehicleIntegrator) -> Self {
        Self {
            integrator,
            mapper: InputMapper::new(config.input.clone()),
            cadence: TickCadence::new(config.cycle_interval()),
            tracker: SignalTracker::new(),
            lights: LightState::new(),
            steering: SteeringState::new(),
            heading: Heading::new(config.initial_heading_deg),
            position: config.start_position,
            route: RouteFollower::new(config.route.clone(), config.start_position),
            max_speed_kmh: i32::try_from(config.max_speed_kmh).unwrap_or(i32::MAX),
            wheelbase_m: config.wheelbase_m,
            use_external_position: config.use_external_position,
            started: false,
            ticks: 0,
        }
    }

    /// Apply one device event.
    ///
    /// Light toggles publish `TURN_SIGNAL` / `LIGHTSTATUS` straight away;
    /// everything else shows up in the signals of the next tick.
    pub fn handle_input<S: SignalSink + ?Sized>(
        &mut self,
        event: InputEvent,
        sink: &mut S,
    ) -> Option<InputAction> {
        let action = self.mapper.map(event)?;
        match action {
            InputAction::Throttle(raw) => self.integrator.chg_throttle(raw),
            InputAction::Brake(raw) => self.integrator.chg_brake(raw),
            InputAction::Steering(value) => self.steering.on_axis(value),
            InputAction::ShiftUp => self.integrator.shift_up(),
            InputAction::ShiftDown => self.integrator.shift_down(),
            InputAction::Manual(target) => self.integrator.set_manual(target),
            InputAction::ToggleTurnRight | InputAction::ToggleTurnLeft => {
                let turn = if action == InputAction::ToggleTurnRight {
                    self.lights.toggle_right()
                } else {
                    self.lights.toggle_left()
                };
                debug!(?turn, "turn signal toggled");
                self.tracker.publish(sink, VehicleSignal::TurnSignal(turn.code()));
                self.tracker.publish(sink, VehicleSignal::LightStatus(self.lights.to_flags()));
            }
            InputAction::ToggleHeadLight => {
                let on = self.lights.toggle_head_light();
                debug!(on, "head light toggled");
                self.tracker.publish(sink, VehicleSignal::LightStatus(self.lights.to_flags()));
            }
        }
        Some(action)
    }

    /// Advance the vehicle to `now` and publish whatever changed.
    pub fn tick<S: SignalSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> Cycle {
        if !self.started {
            self.started = true;
            self.tracker
                .publish(sink, VehicleSignal::Location(self.position.to_location()));
        }
        self.ticks = self.ticks.saturating_add(1);

        self.integrator.update_avg_at(now);

        let on_brake = self.integrator.is_on_brake();
        self.tracker
            .publish_if_changed(sink, VehicleSignal::BrakeSignal(on_brake));
        let gear = GearSignal::from(self.integrator.transmission());
        self.tracker.publish_if_changed(sink, VehicleSignal::Shift(gear));

        let cycle = self.cadence.advance(now);
        if cycle.is_slow() {
            self.publish_slow(sink);
        }
        if cycle.is_fast() {
            self.publish_fast(sink);
        }
        cycle
    }

    fn publish_slow<S: SignalSink + ?Sized>(&mut self, sink: &mut S) {
        let angle = self.steering.display_angle();
        let rpm = self.integrator.rpm() as i32;
        let pedal = self.integrator.calc_acc_pedal_open();
        self.tracker.publish_if_changed(sink, VehicleSignal::Steering(angle));
        self.tracker.publish_if_changed(sink, VehicleSignal::EngineSpeed(rpm));
        self.tracker.publish_if_changed(sink, VehicleSignal::AccpedalOpen(pedal));
    }

    fn publish_fast<S: SignalSink + ?Sized>(&mut self, sink: &mut S) {
        let pressure = self.integrator.calc_pressure(self.integrator.brake_avg());
        let speed = (self.integrator.speed() as i32).min(self.max_speed_kmh);
        self.tracker.publish_if_changed(sink, VehicleSignal::BrakePressure(pressure));
        self.tracker.publish_if_changed(sink, VehicleSignal::Velocity(speed));

        let run = self.integrator.tripmeter();
        self.integrator.tripmeter_reset();

        if let Some(route) = self.route.as_mut() {
            let step = route.step(self.position, run);
            self.heading = step.heading;
            self.position = step.position;
            self.publish_heading(sink);
            self.publish_location(sink);
            return;
        }

        if run.abs() < f64::EPSILON {
            return;
        }
        self.heading = azimuth_update(
            self.heading,
            f64::from(self.steering.delta_deg()),
            run,
            self.wheelbase_m,
        );
        self.publish_heading(sink);
        if !self.use_external_position {
            self.position = destination_or_fallback(self.position, self.heading, run);
            self.publish_location(sink);
        }
    }

    fn publish_heading<S: SignalSink + ?Sized>(&mut self, sink: &mut S) {
        self.tracker
            .publish_if_changed(sink, VehicleSignal::Direction(self.heading.whole_degrees()));
    }

    fn publish_location<S: SignalSink + ?Sized>(&mut self, sink: &mut S) {
        self.tracker
            .publish_if_changed(sink, VehicleSignal::Location(self.position.to_location()));
    }

    pub fn integrator(&self) -> &VehicleIntegrator {
        &self.integrator
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn lights(&self) -> &LightState {
        &self.lights
    }

    pub fn steering(&self) -> &SteeringState {
        &self.steering
    }

    pub fn route(&self) -> Option<&RouteFollower> {
        self.route.as_ref()
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carsim_telemetry::{RecordingSink, SignalKind};
    use std::time::Duration;

    fn seeded() -> Simulator {
        Simulator::with_seed(&SimulatorConfig::default(), 7)
    }

    #[test]
    fn test_first_tick_publishes_location_brake_and_gear() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        let cycle = sim.tick(Instant::now(), &mut sink);
        assert_eq!(cycle, Cycle::Idle);

        let kinds: Vec<SignalKind> = sink.signals().iter().map(VehicleSignal::kind).collect();
        assert_eq!(
            kinds,
            vec![SignalKind::Location, SignalKind::BrakeSignal, SignalKind::Shift]
        );
        let start = SimulatorConfig::default().start_position.to_location();
        assert_eq!(sink.last_of(SignalKind::Location), Some(&VehicleSignal::Location(start)));
    }

    #[test]
    fn test_unchanged_signals_not_republished() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        let t0 = Instant::now();
        sim.tick(t0, &mut sink);
        sink.take();
        sim.tick(t0 + Duration::from_millis(10), &mut sink);
        assert!(sink.is_empty(), "{:?}", sink.signals());
    }

    #[test]
    fn test_turn_signals_publish_immediately() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        sim.handle_input(InputEvent::Button { number: 4, pressed: true }, &mut sink);
        assert_eq!(
            sink.take(),
            vec![
                VehicleSignal::TurnSignal(1),
                VehicleSignal::LightStatus([0, 0, 1, 0, 0, 0, 0, 0]),
            ]
        );

        sim.handle_input(InputEvent::Button { number: 5, pressed: true }, &mut sink);
        sim.handle_input(InputEvent::Button { number: 3, pressed: true }, &mut sink);
        assert_eq!(
            sink.take(),
            vec![
                VehicleSignal::TurnSignal(2),
                VehicleSignal::LightStatus([0, 1, 0, 0, 0, 0, 0, 0]),
                VehicleSignal::LightStatus([1, 1, 0, 0, 0, 0, 0, 0]),
            ]
        );
    }

    #[test]
    fn test_shift_published_on_tick() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        let t0 = Instant::now();
        sim.tick(t0, &mut sink);
        sink.take();

        sim.handle_input(InputEvent::Button { number: 10, pressed: true }, &mut sink);
        assert!(sink.is_empty());
        sim.tick(t0 + Duration::from_millis(10), &mut sink);
        assert_eq!(
            sink.take(),
            vec![VehicleSignal::Shift(GearSignal { position: 1, value: 128, mode: 0 })]
        );
    }

    #[test]
    fn test_slow_cycle_publishes_engine_and_pedal() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        let t0 = Instant::now();
        sim.handle_input(InputEvent::Axis { number: 1, value: 0 }, &mut sink);
        for k in 0..=2u32 {
            sim.tick(t0 + Duration::from_millis(50) * k, &mut sink);
        }
        assert_eq!(sink.count_of(SignalKind::EngineSpeed), 1);
        assert_eq!(sink.last_of(SignalKind::AccpedalOpen), Some(&VehicleSignal::AccpedalOpen(0)));
        assert_eq!(sink.last_of(SignalKind::Steering), Some(&VehicleSignal::Steering(0)));
        assert_eq!(sink.last_of(SignalKind::Velocity), Some(&VehicleSignal::Velocity(0)));
        assert_eq!(sink.last_of(SignalKind::BrakePressure), Some(&VehicleSignal::BrakePressure(0)));
    }

    #[test]
    fn test_unmapped_event_is_ignored() {
        let mut sim = seeded();
        let mut sink = RecordingSink::new();
        assert_eq!(
            sim.handle_input(InputEvent::Axis { number: 9, value: 100 }, &mut sink),
            None
        );
        assert!(sink.is_empty());
    }
}
