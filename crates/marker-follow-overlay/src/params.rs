use marker_follow_core::{Rgb, SelectionPolicy};
use serde::{Deserialize, Serialize};

/// Overlay appearance and behavior settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OverlayParams {
    /// Radius of the filled dot drawn at the subject marker center.
    pub center_radius: i64,
    /// Color of the center dot.
    pub center_color: Rgb,
    /// Color of the pointer dot.
    pub pointer_color: Rgb,
    /// Color of marker outlines and id labels.
    pub outline_color: Rgb,
    /// Whether to render marker id labels next to the outlines.
    pub draw_ids: bool,
    /// Which marker drives the center dot when several are detected.
    #[serde(default)]
    pub selection: SelectionPolicy,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            center_radius: 8,
            center_color: [0, 255, 0],
            pointer_color: [255, 255, 0],
            outline_color: [0, 200, 255],
            draw_ids: true,
            selection: SelectionPolicy::FirstDetected,
        }
    }
}
