//! Bounded hand-off from the control loop to the transport.
//!
//! The producer side never blocks. When the queue is full the signal is
//! dropped and counted; the control loop keeps its cadence regardless of how
//! fast the consumer drains.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use carsim_errors::ChannelError;
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender, TryRecvError, TrySendError};
use tracing::warn;

use crate::signal::VehicleSignal;
use crate::sink::SignalSink;

/// Create a bounded signal channel holding at most `capacity` signals.
///
/// A capacity of zero is raised to one.
pub fn signal_channel(capacity: usize) -> (SignalSender, SignalReceiver) {
    let (tx, rx) = channel::bounded(capacity.max(1));
    let sender = SignalSender {
        tx,
        dropped: Arc::new(AtomicU64::new(0)),
        disconnected: AtomicBool::new(false),
    };
    let receiver = SignalReceiver {
        rx,
        dropped: Arc::clone(&sender.dropped),
    };
    (sender, receiver)
}

/// Producer half, owned by the control loop.
#[derive(Debug)]
pub struct SignalSender {
    tx: Sender<VehicleSignal>,
    dropped: Arc<AtomicU64>,
    disconnected: AtomicBool,
}

impl SignalSender {
    /// Enqueue without blocking.
    ///
    /// # Errors
    ///
    /// [`ChannelError::Full`] if the queue is at capacity (the signal is
    /// dropped and counted), [`ChannelError::Disconnected`] if the receiver
    /// is gone.
    pub fn try_publish(&self, signal: VehicleSignal) -> Result<(), ChannelError> {
        match self.tx.try_send(signal) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(dropped)) => {
                let count = self.dropped.fetch_add(1, Ordering::Relaxed).saturating_add(1);
                if count.is_power_of_two() {
                    warn!(signal = dropped.name(), dropped = count, "signal queue full, dropping");
                }
                Err(ChannelError::Full)
            }
            Err(TrySendError::Disconnected(_)) => {
                if !self.disconnected.swap(true, Ordering::Relaxed) {
                    warn!("signal receiver disconnected");
                }
                Err(ChannelError::Disconnected)
            }
        }
    }

    /// Signals dropped because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn capacity(&self) -> usize {
        self.tx.capacity().unwrap_or(0)
    }

    /// Signals currently waiting in the queue.
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }
}

impl SignalSink for SignalSender {
    fn publish(&mut self, signal: VehicleSignal) -> bool {
        // Full and Disconnected are both accounted for inside try_publish.
        match self.try_publish(signal) {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(signal = signal.name(), %err, "signal not delivered");
                false
            }
        }
    }
}

/// Consumer half, owned by the transport.
#[derive(Debug, Clone)]
pub struct SignalReceiver {
    rx: Receiver<VehicleSignal>,
    dropped: Arc<AtomicU64>,
}

impl SignalReceiver {
    /// Non-blocking receive.
    ///
    /// # Errors
    ///
    /// [`ChannelError::Disconnected`] once the sender is gone and the queue is
    /// empty. An empty but live queue yields `Ok(None)`.
    pub fn try_recv(&self) -> Result<Option<VehicleSignal>, ChannelError> {
        match self.rx.try_recv() {
            Ok(signal) => Ok(Some(signal)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(ChannelError::Disconnected),
        }
    }

    /// Block for up to `timeout` waiting for a signal.
    ///
    /// # Errors
    ///
    /// [`ChannelError::Disconnected`] once the sender is gone and the queue is
    /// empty.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<VehicleSignal>, ChannelError> {
        match self.rx.recv_timeout(timeout) {
            Ok(signal) => Ok(Some(signal)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(ChannelError::Disconnected),
        }
    }

    /// Everything currently queued.
    pub fn drain(&self) -> Vec<VehicleSignal> {
        self.rx.try_iter().collect()
    }

    /// Blocking iterator that ends when the sender is dropped.
    pub fn iter(&self) -> impl Iterator<Item = VehicleSignal> + '_ {
        self.rx.iter()
    }

    /// Signals the producer has dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_delivery() -> Result<(), Box<dyn std::error::Error>> {
        let (mut tx, rx) = signal_channel(4);
        tx.publish(VehicleSignal::Velocity(1));
        tx.publish(VehicleSignal::Velocity(2));
        assert_eq!(rx.try_recv()?, Some(VehicleSignal::Velocity(1)));
        assert_eq!(rx.try_recv()?, Some(VehicleSignal::Velocity(2)));
        assert_eq!(rx.try_recv()?, None);
        Ok(())
    }

    #[test]
    fn test_full_queue_drops_and_counts() {
        let (tx, rx) = signal_channel(2);
        assert_eq!(tx.try_publish(VehicleSignal::Velocity(1)), Ok(()));
        assert_eq!(tx.try_publish(VehicleSignal::Velocity(2)), Ok(()));
        assert_eq!(tx.try_publish(VehicleSignal::Velocity(3)), Err(ChannelError::Full));
        assert_eq!(tx.try_publish(VehicleSignal::Velocity(4)), Err(ChannelError::Full));
        assert_eq!(tx.dropped(), 2);
        assert_eq!(rx.dropped(), 2);
        assert_eq!(rx.drain(), vec![VehicleSignal::Velocity(1), VehicleSignal::Velocity(2)]);
    }

    #[test]
    fn test_disconnected_receiver() {
        let (tx, rx) = signal_channel(2);
        drop(rx);
        assert_eq!(
            tx.try_publish(VehicleSignal::Velocity(1)),
            Err(ChannelError::Disconnected)
        );
        assert_eq!(tx.dropped(), 0);
    }

    #[test]
    fn test_disconnected_sender_after_drain() -> Result<(), Box<dyn std::error::Error>> {
        let (mut tx, rx) = signal_channel(2);
        tx.publish(VehicleSignal::Steering(1));
        drop(tx);
        assert_eq!(rx.try_recv()?, Some(VehicleSignal::Steering(1)));
        assert_eq!(rx.try_recv(), Err(ChannelError::Disconnected));
        Ok(())
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let (tx, _rx) = signal_channel(0);
        assert_eq!(tx.capacity(), 1);
    }

    #[test]
    fn test_cross_thread_consumer() -> Result<(), Box<dyn std::error::Error>> {
        let (mut tx, rx) = signal_channel(64);
        let consumer = std::thread::spawn(move || rx.iter().count());
        for i in 0..10 {
            tx.publish(VehicleSignal::Direction(i));
        }
        drop(tx);
        let received = consumer.join().map_err(|e| format!("consumer panicked: {e:?}"))?;
        assert_eq!(received, 10);
        Ok(())
    }
}
