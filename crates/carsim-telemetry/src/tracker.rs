//! Change-only publishing.

use std::collections::HashMap;

use crate::signal::{SignalKind, VehicleSignal};
use crate::sink::SignalSink;

/// Remembers the last value published for each signal.
///
/// A signal that has never been published always counts as changed, so the
/// first observation of every signal goes out.
#[derive(Debug, Clone, Default)]
pub struct SignalTracker {
    last: HashMap<SignalKind, VehicleSignal>,
}

impl SignalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `signal` differs from the last published value of its kind.
    pub fn has_changed(&self, signal: &VehicleSignal) -> bool {
        self.last.get(&signal.kind()) != Some(signal)
    }

    /// Record `signal` as published and return whether it changed.
    pub fn observe(&mut self, signal: VehicleSignal) -> bool {
        match self.last.insert(signal.kind(), signal) {
            Some(previous) => previous != signal,
            None => true,
        }
    }

    /// Publish `signal` to `sink` if it changed. Returns whether it was sent.
    ///
    /// The value is only remembered once the sink accepts it, so a change the
    /// sink dropped goes out again on the next call.
    pub fn publish_if_changed<S: SignalSink + ?Sized>(
        &mut self,
        sink: &mut S,
        signal: VehicleSignal,
    ) -> bool {
        if !self.has_changed(&signal) {
            return false;
        }
        let delivered = sink.publish(signal);
        if delivered {
            self.last.insert(signal.kind(), signal);
        }
        delivered
    }

    /// Publish unconditionally. Returns whether the sink accepted it.
    ///
    /// On delivery the value is remembered. On loss the kind is forgotten, so
    /// the next observation of it is sent whatever its value.
    pub fn publish<S: SignalSink + ?Sized>(&mut self, sink: &mut S, signal: VehicleSignal) -> bool {
        let delivered = sink.publish(signal);
        if delivered {
            self.last.insert(signal.kind(), signal);
        } else {
            self.last.remove(&signal.kind());
        }
        delivered
    }

    /// Last published value of `kind`.
    pub fn last(&self, kind: SignalKind) -> Option<&VehicleSignal> {
        self.last.get(&kind)
    }

    /// Forget everything, so the next observation of each signal is sent.
    pub fn clear(&mut self) {
        self.last.clear();
    }
}
