//! Signal consumers.

use crate::signal::{SignalKind, VehicleSignal};

/// Anything the control loop can publish signals to.
///
/// Publishing never blocks. Sinks that can lose signals account for the
/// loss themselves and report it by returning `false`.
pub trait SignalSink {
    /// Hand `signal` to the consumer. Returns whether it was delivered.
    fn publish(&mut self, signal: VehicleSignal) -> bool;
}

impl<S: SignalSink + ?Sized> SignalSink for &mut S {
    fn publish(&mut self, signal: VehicleSignal) -> bool {
        (**self).publish(signal)
    }
}

impl<S: SignalSink + ?Sized> SignalSink for Box<S> {
    fn publish(&mut self, signal: VehicleSignal) -> bool {
        (**self).publish(signal)
    }
}

/// In-memory sink that keeps every published signal in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    signals: Vec<VehicleSignal>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signals(&self) -> &[VehicleSignal] {
        &self.signals
    }

    /// Take the recorded signals, leaving the sink empty.
    pub fn take(&mut self) -> Vec<VehicleSignal> {
        std::mem::take(&mut self.signals)
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Signals of one kind, in publish order.
    pub fn of_kind(&self, kind: SignalKind) -> impl Iterator<Item = &VehicleSignal> + '_ {
        self.signals.iter().filter(move |s| s.kind() == kind)
    }

    pub fn count_of(&self, kind: SignalKind) -> usize {
        self.of_kind(kind).count()
    }

    /// Most recent signal of `kind`.
    pub fn last_of(&self, kind: SignalKind) -> Option<&VehicleSignal> {
        self.signals.iter().rev().find(|s| s.kind() == kind)
    }
}

impl SignalSink for RecordingSink {
    fn publish(&mut self, signal: VehicleSignal) -> bool {
        self.signals.push(signal);
        true
    }
}
