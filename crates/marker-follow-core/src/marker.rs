use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// One detected fiducial marker.
///
/// Corner order (clockwise or counter-clockwise) is whatever the detector
/// returned; it is stable per marker across frames under ordinary viewing
/// conditions, which is all the center computation relies on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Decoded marker id. Small non-negative integer, not guaranteed
    /// unique across frames.
    pub id: u32,
    /// Exactly four ordered corner points in pixel coordinates.
    pub corners: [Point2<f32>; 4],
}

impl Marker {
    /// Marker center: midpoint of two diagonally opposite corners.
    pub fn center(&self) -> Point2<f32> {
        let a = self.corners[0];
        let c = self.corners[2];
        Point2::new((a.x + c.x) / 2.0, (a.y + c.y) / 2.0)
    }
}

/// Result of running the detector once on one frame.
///
/// Zero markers is the normal empty case, not an error. Duplicate ids
/// within one frame are not assumed absent and not enforced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub markers: Vec<Marker>,
}

impl Detection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Pick the subject marker per `policy`.
    ///
    /// Returns `None` for an empty detection; callers must branch on that
    /// before any geometry computation.
    pub fn select(
        &self,
        policy: SelectionPolicy,
        pointer: Option<Point2<f32>>,
    ) -> Option<&Marker> {
        match policy {
            SelectionPolicy::FirstDetected => self.markers.first(),
            SelectionPolicy::LowestId => self.markers.iter().min_by_key(|m| m.id),
            SelectionPolicy::ClosestToPointer => match pointer {
                Some(p) => self.markers.iter().min_by(|a, b| {
                    let da = (a.center() - p).norm_squared();
                    let db = (b.center() - p).norm_squared();
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                }),
                // No pointer seen yet: fall back to the reference behavior.
                None => self.markers.first(),
            },
        }
    }
}

/// Which marker drives the overlay when several are detected at once.
///
/// The reference behavior used the first detected marker unconditionally;
/// the policy is a configuration choice rather than a guess.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    #[default]
    FirstDetected,
    LowestId,
    ClosestToPointer,
}

/// Signed displacement from the pointer to the marker center.
///
/// Exposed for downstream consumers (e.g. motion control); not rendered.
pub fn displacement(center: Point2<f32>, pointer: Point2<f32>) -> Vector2<f32> {
    center - pointer
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(id: u32, x0: f32, y0: f32, side: f32) -> Marker {
        Marker {
            id,
            corners: [
                Point2::new(x0, y0),
                Point2::new(x0, y0 + side),
                Point2::new(x0 + side, y0 + side),
                Point2::new(x0 + side, y0),
            ],
        }
    }

    #[test]
    fn center_is_midpoint_of_opposite_corners() {
        let marker = square(7, 100.0, 100.0, 50.0);
        let c = marker.center();
        assert_relative_eq!(c.x, 125.0);
        assert_relative_eq!(c.y, 125.0);
    }

    #[test]
    fn center_exact_for_skewed_quad() {
        let marker = Marker {
            id: 0,
            corners: [
                Point2::new(10.0, 4.0),
                Point2::new(40.0, 8.0),
                Point2::new(44.0, 30.0),
                Point2::new(12.0, 28.0),
            ],
        };
        let c = marker.center();
        assert_eq!(c.x, (10.0 + 44.0) / 2.0);
        assert_eq!(c.y, (4.0 + 30.0) / 2.0);
    }

    #[test]
    fn coincident_pointer_gives_zero_displacement() {
        let marker = square(0, 100.0, 100.0, 50.0);
        let d = displacement(marker.center(), Point2::new(125.0, 125.0));
        assert_eq!(d, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn empty_detection_selects_nothing() {
        let det = Detection::empty();
        assert!(det.select(SelectionPolicy::FirstDetected, None).is_none());
        assert!(det.select(SelectionPolicy::LowestId, None).is_none());
        assert!(det
            .select(SelectionPolicy::ClosestToPointer, Some(Point2::new(0.0, 0.0)))
            .is_none());
    }

    #[test]
    fn selection_policies_pick_distinct_markers() {
        let det = Detection {
            markers: vec![square(9, 0.0, 0.0, 10.0), square(2, 100.0, 100.0, 10.0)],
        };

        let first = det.select(SelectionPolicy::FirstDetected, None).unwrap();
        assert_eq!(first.id, 9);

        let lowest = det.select(SelectionPolicy::LowestId, None).unwrap();
        assert_eq!(lowest.id, 2);

        let near = det
            .select(
                SelectionPolicy::ClosestToPointer,
                Some(Point2::new(104.0, 103.0)),
            )
            .unwrap();
        assert_eq!(near.id, 2);

        // No pointer yet: closest-to-pointer falls back to first-detected.
        let fallback = det.select(SelectionPolicy::ClosestToPointer, None).unwrap();
        assert_eq!(fallback.id, 9);
    }

    #[test]
    fn selection_policy_serde_roundtrip() {
        let json = serde_json::to_string(&SelectionPolicy::ClosestToPointer).unwrap();
        assert_eq!(json, "\"closest_to_pointer\"");
        let back: SelectionPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SelectionPolicy::ClosestToPointer);
    }
}
