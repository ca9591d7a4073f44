use marker_follow_core::Frame;
use thiserror::Error;

/// The presentation surface rejected a frame (window closed, surface torn
/// down). Terminal for the overlay loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("presentation sink failed: {0}")]
pub struct PresentError(pub String);

/// A named display surface that shows one frame at a time.
///
/// Presenting replaces whatever the sink previously showed; no
/// double-buffering is required beyond what the backend provides.
pub trait PresentationSink {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError>;
}

/// Discards every frame. Useful for headless runs and benchmarks.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn present(&mut self, _frame: &Frame) -> Result<(), PresentError> {
        Ok(())
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError> {
        (**self).present(frame)
    }
}
