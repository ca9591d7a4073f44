//! Core types for the marker-follow overlay loop.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any concrete marker detector, capture backend or window
//! system — those are collaborators behind the traits defined here and in
//! `marker-follow-overlay`.

mod detector;
mod frame;
mod logger;
mod marker;

pub use detector::{FnDetector, MarkerDetector};
pub use frame::{Frame, FrameError, FrameView, Rgb};
pub use marker::{displacement, Detection, Marker, SelectionPolicy};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
