//! The overlay loop: acquire, detect, annotate, present.

use log::warn;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use thiserror::Error;

use marker_follow_core::{displacement, Frame, MarkerDetector};

use crate::cancel::CancelToken;
use crate::draw;
use crate::params::OverlayParams;
use crate::sink::{PresentError, PresentationSink};
use crate::source::FrameSource;

/// Errors that terminate the overlay loop.
///
/// Acquisition errors are *not* represented here: transient ones are
/// recovered locally (the tick is skipped) and a clean end of stream is a
/// normal stop, not an error.
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error(transparent)]
    Present(#[from] PresentError),
}

/// Loop lifecycle. `Stopped` is terminal; there is no resume.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// What one overlay step observed and computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StepReport {
    /// Number of markers in this frame's detection.
    pub markers: usize,
    /// Center of the subject marker, if any marker was detected.
    pub subject_center: Option<Point2<f32>>,
    /// `center - pointer`, when both a subject and a pointer are known.
    /// Exposed for downstream motion control; not rendered.
    pub displacement: Option<Vector2<f32>>,
}

/// Totals for one `run` of the loop.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames_presented: u64,
    pub frames_skipped: u64,
}

/// Generic pointer-motion handler invoked by the presentation collaborator.
pub trait PointerHandler {
    fn pointer_moved(&mut self, position: Point2<f32>);
}

/// Turns a sequence of frames into a sequence of annotated, presented
/// images.
///
/// Detection-then-render is one atomic step per frame: the loop never
/// reads detection data for a frame it is not about to render.
pub struct OverlayLoop<D, S> {
    detector: D,
    sink: S,
    params: OverlayParams,
    cancel: CancelToken,
    state: LoopState,
    pointer: Option<Point2<f32>>,
    summary: RunSummary,
}

impl<D, S> OverlayLoop<D, S>
where
    D: MarkerDetector,
    S: PresentationSink,
{
    pub fn new(detector: D, sink: S, params: OverlayParams, cancel: CancelToken) -> Self {
        Self {
            detector,
            sink,
            params,
            cancel,
            state: LoopState::Running,
            pointer: None,
            summary: RunSummary::default(),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn pointer(&self) -> Option<Point2<f32>> {
        self.pointer
    }

    /// Transition to `Stopped`. Idempotent; there is no resume.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    fn running(&self) -> bool {
        self.state == LoopState::Running && !self.cancel.is_cancelled()
    }

    /// One atomic overlay step: detect, compute geometry, annotate,
    /// present.
    ///
    /// The caller hands in an already-copied frame; the original reference
    /// image (if any) is never touched.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, frame))
    )]
    pub fn step(&mut self, mut frame: Frame) -> Result<StepReport, OverlayError> {
        let detection = self.detector.detect(&frame.view());

        let subject = detection.select(self.params.selection, self.pointer);
        let subject_center = subject.map(|m| m.center());
        let disp = match (subject_center, self.pointer) {
            (Some(center), Some(pointer)) => Some(displacement(center, pointer)),
            _ => None,
        };

        for marker in &detection.markers {
            draw::draw_marker_outline(&mut frame, marker, self.params.outline_color);
            if self.params.draw_ids {
                draw::draw_marker_id(&mut frame, marker, self.params.outline_color);
            }
        }
        if let Some(center) = subject_center {
            draw::fill_circle(
                &mut frame,
                center,
                self.params.center_radius,
                self.params.center_color,
            );
        }
        if let Some(pointer) = self.pointer {
            draw::fill_circle(
                &mut frame,
                pointer,
                self.params.center_radius,
                self.params.pointer_color,
            );
        }

        self.sink.present(&frame)?;
        self.summary.frames_presented += 1;

        Ok(StepReport {
            markers: detection.len(),
            subject_center,
            displacement: disp,
        })
    }

    /// Acquire one frame and run one step.
    ///
    /// Transient acquisition failures are logged and skip the render for
    /// this tick; a clean end of stream stops the loop. Returns `None`
    /// whenever no frame was presented.
    pub fn poll_once(
        &mut self,
        source: &mut impl FrameSource,
    ) -> Result<Option<StepReport>, OverlayError> {
        if !self.running() {
            return Ok(None);
        }
        match source.next_frame() {
            Ok(frame) => self.step(frame).map(Some),
            Err(err) if err.is_transient() => {
                warn!(target: "acquisition", "skipping frame: {err}");
                self.summary.frames_skipped += 1;
                Ok(None)
            }
            Err(_) => {
                self.stop();
                Ok(None)
            }
        }
    }

    /// Poll until stopped or cancelled, then return the totals.
    ///
    /// The cancellation token is checked at least once per frame; a flip
    /// is observed within one polling interval.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, source))
    )]
    pub fn run(&mut self, source: &mut impl FrameSource) -> Result<RunSummary, OverlayError> {
        while self.running() {
            if let Err(err) = self.poll_once(source) {
                self.stop();
                return Err(err);
            }
        }
        self.stop();
        Ok(self.summary)
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }
}

impl<D, S> PointerHandler for OverlayLoop<D, S> {
    /// Record the last known pointer position. No other state is touched;
    /// the next step draws the pointer dot and reports the displacement.
    fn pointer_moved(&mut self, position: Point2<f32>) {
        self.pointer = Some(position);
    }
}
