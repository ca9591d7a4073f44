use crate::{Detection, FrameView};

/// Consumed interface to an external fiducial-marker detector.
///
/// The contract is pure with respect to any single invocation: no
/// cross-call state is required by the overlay loop, and the detector only
/// ever sees a read-only view of the frame. An empty [`Detection`] is the
/// normal no-markers case, never an error.
pub trait MarkerDetector {
    fn detect(&self, frame: &FrameView<'_>) -> Detection;
}

/// Adapter that turns a closure into a [`MarkerDetector`].
///
/// Lets tests and demos inject scripted detections without a real
/// detection library.
pub struct FnDetector<F>(F);

impl<F> FnDetector<F>
where
    F: Fn(&FrameView<'_>) -> Detection,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> MarkerDetector for FnDetector<F>
where
    F: Fn(&FrameView<'_>) -> Detection,
{
    fn detect(&self, frame: &FrameView<'_>) -> Detection {
        (self.0)(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Marker};
    use nalgebra::Point2;

    #[test]
    fn fn_detector_forwards_to_closure() {
        let detector = FnDetector::new(|view: &FrameView<'_>| {
            let s = view.width as f32;
            Detection {
                markers: vec![Marker {
                    id: 3,
                    corners: [
                        Point2::new(0.0, 0.0),
                        Point2::new(0.0, s),
                        Point2::new(s, s),
                        Point2::new(s, 0.0),
                    ],
                }],
            }
        });

        let frame = Frame::filled(16, 16, [0, 0, 0]);
        let det = detector.detect(&frame.view());
        assert_eq!(det.len(), 1);
        assert_eq!(det.markers[0].id, 3);
    }
}
