//! Queue hand-off errors between the control loop and its collaborators.

use crate::common::ErrorSeverity;

/// Errors from the bounded signal and input queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// The queue was at capacity and the item was dropped
    #[error("Queue full, item dropped")]
    Full,

    /// The other side of the queue has gone away
    #[error("Queue disconnected")]
    Disconnected,
}

impl ChannelError {
    /// Get the error severity.
    pub fn severity(self) -> ErrorSeverity {
        match self {
            ChannelError::Full => ErrorSeverity::Warning,
            ChannelError::Disconnected => ErrorSeverity::Critical,
        }
    }
}
