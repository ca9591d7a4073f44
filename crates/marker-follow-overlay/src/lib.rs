//! The live marker-tracking overlay loop.
//!
//! This crate turns a sequence of frames into a sequence of annotated,
//! presented images:
//!
//! - [`FrameSource`] supplies frames (a static image, a replayed sequence,
//!   or a real capture backend behind the trait),
//! - the detector from `marker-follow-core` finds markers in each frame,
//! - [`OverlayLoop`] computes the subject center and pointer displacement,
//!   draws the annotations and hands the frame to a [`PresentationSink`],
//! - [`CancelToken`] is the single point of cross-activity communication,
//! - [`AcquisitionTask`] runs the loop on a background thread with an
//!   explicit join contract so the frame-source resource is released only
//!   after the loop has fully exited.

mod cancel;
pub mod draw;
mod params;
mod pipeline;
mod sink;
mod source;
mod task;

pub use cancel::CancelToken;
pub use params::OverlayParams;
pub use pipeline::{LoopState, OverlayError, OverlayLoop, PointerHandler, RunSummary, StepReport};
pub use sink::{NullSink, PresentError, PresentationSink};
pub use source::{FrameSource, ReplaySource, SourceError, StaticImageSource};
pub use task::AcquisitionTask;
