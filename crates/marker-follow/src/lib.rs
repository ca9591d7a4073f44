//! High-level facade crate for the `marker-follow-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying crates
//! - (feature-gated) conversions between [`Frame`] and the `image` crate's
//!   buffer types, plus file load/save helpers
//!
//! ## Quickstart
//!
//! ```no_run
//! use marker_follow::{CancelToken, FnDetector, NullSink, OverlayLoop, OverlayParams};
//! use marker_follow::{Detection, StaticImageSource};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let frame = marker_follow::io::load_frame("porch.jpg")?;
//! // the seam where a real detection library plugs in
//! let detector = FnDetector::new(|_view: &marker_follow::FrameView<'_>| Detection::empty());
//!
//! let mut looper = OverlayLoop::new(
//!     detector,
//!     NullSink,
//!     OverlayParams::default(),
//!     CancelToken::new(),
//! );
//! let mut source = StaticImageSource::new(frame);
//! let report = looper.poll_once(&mut source)?;
//! println!("markers: {:?}", report.map(|r| r.markers));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: frames, markers, detections, the detector seam, the logger.
//! - [`overlay`]: frame sources, sinks, drawing, the overlay loop, the
//!   cancellation token and the managed acquisition task.
//! - [`control`]: commands, the actuator seam, key maps and the bridge.
//! - [`io`] (feature `image`): `image`-crate conversions and file helpers.

pub use marker_follow_control as control;
pub use marker_follow_core as core;
pub use marker_follow_overlay as overlay;

pub use marker_follow_core::{
    displacement, Detection, FnDetector, Frame, FrameError, FrameView, Marker, MarkerDetector,
    Rgb, SelectionPolicy,
};

pub use marker_follow_overlay::{
    AcquisitionTask, CancelToken, FrameSource, LoopState, NullSink, OverlayError, OverlayLoop,
    OverlayParams, PointerHandler, PresentError, PresentationSink, ReplaySource, RunSummary,
    SourceError, StaticImageSource, StepReport,
};

pub use marker_follow_control::{
    Actuator, ActuatorError, Command, ControlBridge, KeyMap, KeySource,
};

#[cfg(feature = "image")]
pub mod io;
