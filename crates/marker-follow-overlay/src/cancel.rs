use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag for the two concurrent demo activities.
///
/// Single conceptual writer (the control side), any number of readers.
/// This token is the *only* state shared between the acquisition activity
/// and the event-polling activity; there are no queues and no locks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// token was already cancelled. Callers that must act exactly once on
    /// the RUNNING → STOPPED transition branch on the return value.
    pub fn cancel(&self) -> bool {
        !self.cancelled.swap(true, Ordering::SeqCst)
    }

    /// Lock-free read; the acquisition loop polls this once per frame.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
