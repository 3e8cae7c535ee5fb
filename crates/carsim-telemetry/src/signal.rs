//! Published vehicle signals.

use serde::{Deserialize, Serialize};

use crate::gear::GearSignal;

/// One published vehicle signal.
///
/// Serializes as `{"name": "<WIRE_NAME>", "value": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleSignal {
    /// Displayed engine RPM.
    EngineSpeed(i32),
    /// Road speed in km/h, clamped to the configured maximum.
    Velocity(i32),
    /// Brake pedal pressed.
    BrakeSignal(bool),
    /// Brake pressure, 0-100.
    BrakePressure(i32),
    /// Accelerator pedal opening, 0-100.
    AccpedalOpen(i32),
    /// Gear position, shift value and mode.
    Shift(GearSignal),
    /// Heading in whole degrees.
    Direction(i32),
    /// `[lat, lng, altitude]`.
    Location([f64; 3]),
    /// Steering wheel display angle in whole degrees.
    Steering(i32),
    /// 0 off, 1 right, 2 left.
    TurnSignal(i32),
    /// Lamp flags: head, left, right, parking, fog, hazard, brake, high beam.
    #[serde(rename = "LIGHTSTATUS")]
    LightStatus([u8; 8]),
}

/// Discriminant of a [`VehicleSignal`], used to key change tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignalKind {
    /// See [`VehicleSignal::EngineSpeed`].
    EngineSpeed,
    /// See [`VehicleSignal::Velocity`].
    Velocity,
    /// See [`VehicleSignal::BrakeSignal`].
    BrakeSignal,
    /// See [`VehicleSignal::BrakePressure`].
    BrakePressure,
    /// See [`VehicleSignal::AccpedalOpen`].
    AccpedalOpen,
    /// See [`VehicleSignal::Shift`].
    Shift,
    /// See [`VehicleSignal::Direction`].
    Direction,
    /// See [`VehicleSignal::Location`].
    Location,
    /// See [`VehicleSignal::Steering`].
    Steering,
    /// See [`VehicleSignal::TurnSignal`].
    TurnSignal,
    /// See [`VehicleSignal::LightStatus`].
    LightStatus,
}

impl SignalKind {
    /// Wire name of the signal.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::EngineSpeed => "ENGINE_SPEED",
            Self::Velocity => "VELOCITY",
            Self::BrakeSignal => "BRAKE_SIGNAL",
            Self::BrakePressure => "BRAKE_PRESSURE",
            Self::AccpedalOpen => "ACCPEDAL_OPEN",
            Self::Shift => "SHIFT",
            Self::Direction => "DIRECTION",
            Self::Location => "LOCATION",
            Self::Steering => "STEERING",
            Self::TurnSignal => "TURN_SIGNAL",
            Self::LightStatus => "LIGHTSTATUS",
        }
    }
}

impl VehicleSignal {
    /// Which signal this is.
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::EngineSpeed(_) => SignalKind::EngineSpeed,
            Self::Velocity(_) => SignalKind::Velocity,
            Self::BrakeSignal(_) => SignalKind::BrakeSignal,
            Self::BrakePressure(_) => SignalKind::BrakePressure,
            Self::AccpedalOpen(_) => SignalKind::AccpedalOpen,
            Self::Shift(_) => SignalKind::Shift,
            Self::Direction(_) => SignalKind::Direction,
            Self::Location(_) => SignalKind::Location,
            Self::Steering(_) => SignalKind::Steering,
            Self::TurnSignal(_) => SignalKind::TurnSignal,
            Self::LightStatus(_) => SignalKind::LightStatus,
        }
    }

    /// Wire name of the signal.
    pub fn name(&self) -> &'static str {
        self.kind().wire_name()
    }
}

impl core::fmt::Display for VehicleSignal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = self.name();
        match self {
            Self::EngineSpeed(v)
            | Self::Velocity(v)
            | Self::BrakePressure(v)
            | Self::AccpedalOpen(v)
            | Self::Direction(v)
            | Self::Steering(v)
            | Self::TurnSignal(v) => write!(f, "{name} {v}"),
            Self::BrakeSignal(on) => write!(f, "{name} {on}"),
            Self::Shift(gear) => write!(f, "{name} [{}, {}, {}]", gear.position, gear.value, gear.mode),
            Self::Location([lat, lng, alt]) => write!(f, "{name} [{lat:.6}, {lng:.6}, {alt}]"),
            Self::LightStatus(flags) => write!(f, "{name} {flags:?}"),
        }
    }
}
