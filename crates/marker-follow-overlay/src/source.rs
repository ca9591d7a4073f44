use marker_follow_core::Frame;
use thiserror::Error;

/// Errors produced by a frame source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// One frame was lost in transit. Transient; skip this tick.
    #[error("frame dropped")]
    FrameDropped,

    /// The device failed to capture. Transient; skip this tick.
    #[error("capture failed: {0}")]
    Capture(String),

    /// Clean end of stream. Terminal; the loop stops.
    #[error("frame source exhausted")]
    Exhausted,
}

impl SourceError {
    /// Whether the loop should keep polling after this error.
    pub fn is_transient(&self) -> bool {
        !matches!(self, SourceError::Exhausted)
    }
}

/// Supplies a continuous sequence of raster frames.
///
/// Implementations exclusively own their capture resource (file handle,
/// camera stream); the resource is released when the source is dropped,
/// which the managed acquisition task guarantees happens only after the
/// loop has exited.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Frame, SourceError>;
}

/// A source backed by one reference image.
///
/// Every `next_frame` yields a fresh copy, so repeated overlay steps never
/// mutate the original.
#[derive(Clone, Debug)]
pub struct StaticImageSource {
    reference: Frame,
}

impl StaticImageSource {
    pub fn new(reference: Frame) -> Self {
        Self { reference }
    }

    /// The untouched reference image.
    pub fn reference(&self) -> &Frame {
        &self.reference
    }
}

impl FrameSource for StaticImageSource {
    fn next_frame(&mut self) -> Result<Frame, SourceError> {
        Ok(self.reference.clone())
    }
}

/// Replays a scripted sequence of acquisition results, then reports
/// [`SourceError::Exhausted`]. Used by tests and the headless demos.
#[derive(Debug, Default)]
pub struct ReplaySource {
    items: std::collections::VecDeque<Result<Frame, SourceError>>,
}

impl ReplaySource {
    pub fn new(items: impl IntoIterator<Item = Result<Frame, SourceError>>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    /// A replay of `n` copies of `frame`.
    pub fn repeated(frame: Frame, n: usize) -> Self {
        Self::new(std::iter::repeat_with(move || Ok(frame.clone())).take(n))
    }

    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

impl FrameSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Frame, SourceError> {
        self.items.pop_front().unwrap_or(Err(SourceError::Exhausted))
    }
}
