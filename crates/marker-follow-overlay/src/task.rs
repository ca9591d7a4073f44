use std::thread::{self, JoinHandle};

use log::debug;

use marker_follow_core::MarkerDetector;

use crate::cancel::CancelToken;
use crate::pipeline::{OverlayError, OverlayLoop, RunSummary};
use crate::sink::PresentationSink;
use crate::source::FrameSource;

/// The frame-acquisition activity as a managed background task.
///
/// The task exclusively owns the frame source for its whole lifetime; the
/// source (and whatever device handle it wraps) is dropped only after the
/// loop has exited. The shutdown sequence is therefore always
/// `token.cancel()` then `task.join()`, never a bare detach.
pub struct AcquisitionTask {
    handle: JoinHandle<Result<RunSummary, OverlayError>>,
    cancel: CancelToken,
}

impl AcquisitionTask {
    /// Start the overlay loop on a background thread.
    pub fn spawn<D, S, F>(looper: OverlayLoop<D, S>, source: F) -> Self
    where
        D: MarkerDetector + Send + 'static,
        S: PresentationSink + Send + 'static,
        F: FrameSource + Send + 'static,
    {
        let cancel = looper.cancel_token().clone();
        let handle = thread::spawn(move || {
            let mut looper = looper;
            let mut source = source;
            let result = looper.run(&mut source);
            debug!(target: "acquisition", "acquisition loop exited: {:?}", looper.summary());
            result
            // `source` dropped here, after the loop has fully exited
        });
        Self { handle, cancel }
    }

    /// The shared stop flag for this task.
    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Wait for the loop to exit and return its totals.
    ///
    /// Blocks until the acquisition thread has finished and released the
    /// frame source, so callers can safely tear down shared device state
    /// afterwards.
    pub fn join(self) -> Result<RunSummary, OverlayError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    /// Convenience shutdown: flip the flag, then wait for the loop.
    pub fn cancel_and_join(self) -> Result<RunSummary, OverlayError> {
        self.cancel.cancel();
        self.join()
    }
}
