//! Static-image overlay demo.
//!
//! Loads a reference image (or synthesizes one with a square "marker"),
//! then replays a scripted pointer path over it the way a window system
//! would deliver mouse-move events: every event copies the reference
//! frame, detects markers, draws the center and pointer dots and presents
//! the result — here, into numbered PNG files.
//!
//! The detector is a scripted stand-in; the `MarkerDetector` seam is where
//! a real fiducial detection library plugs in.

use std::{env, fs, path::PathBuf};

use log::{info, LevelFilter};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use marker_follow::core::init_with_level;
use marker_follow::{
    io, CancelToken, Detection, FnDetector, Frame, FrameView, Marker, OverlayLoop, OverlayParams,
    PointerHandler, PresentError, PresentationSink, StaticImageSource, StepReport,
};

#[derive(Debug, Deserialize)]
struct ExampleConfig {
    #[serde(default)]
    image_path: Option<String>,
    #[serde(default = "default_output_dir")]
    output_dir: String,
    #[serde(default = "default_pointer_path")]
    pointer_path: Vec<[f32; 2]>,
    #[serde(default)]
    overlay: OverlayParams,
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            image_path: None,
            output_dir: default_output_dir(),
            pointer_path: default_pointer_path(),
            overlay: OverlayParams::default(),
        }
    }
}

fn default_output_dir() -> String {
    "tmpdata/mouse_follow".to_string()
}

fn default_pointer_path() -> Vec<[f32; 2]> {
    vec![[40.0, 40.0], [80.0, 90.0], [125.0, 125.0], [200.0, 160.0]]
}

#[derive(Debug, Serialize)]
struct ExampleReport {
    frames_written: usize,
    steps: Vec<StepReport>,
}

/// Presents frames by writing them as numbered PNGs.
struct PngSink {
    dir: PathBuf,
    written: usize,
}

impl PresentationSink for PngSink {
    fn present(&mut self, frame: &Frame) -> Result<(), PresentError> {
        let path = self.dir.join(format!("frame_{:03}.png", self.written));
        io::save_frame(&path, frame).map_err(|e| PresentError(e.to_string()))?;
        self.written += 1;
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let cfg = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => ExampleConfig::default(),
    };

    let frame = match &cfg.image_path {
        Some(path) => io::load_frame(path)?,
        None => synthesize_reference_frame(),
    };
    info!("reference frame: {}x{}", frame.width(), frame.height());

    fs::create_dir_all(&cfg.output_dir)?;
    let sink = PngSink {
        dir: PathBuf::from(&cfg.output_dir),
        written: 0,
    };

    let mut looper = OverlayLoop::new(
        scripted_detector(),
        sink,
        cfg.overlay.clone(),
        CancelToken::new(),
    );
    let mut source = StaticImageSource::new(frame);

    let mut steps = Vec::new();
    for [x, y] in &cfg.pointer_path {
        looper.pointer_moved(Point2::new(*x, *y));
        if let Some(report) = looper.poll_once(&mut source)? {
            info!(
                "markers={} center={:?} displacement={:?}",
                report.markers, report.subject_center, report.displacement
            );
            steps.push(report);
        }
    }

    let report = ExampleReport {
        frames_written: steps.len(),
        steps,
    };
    let report_path = PathBuf::from(&cfg.output_dir).join("report.json");
    fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    println!("wrote {} frames and {}", report.frames_written, report_path.display());
    Ok(())
}

/// Gray frame with one black square where the scripted detector reports a
/// marker.
fn synthesize_reference_frame() -> Frame {
    let mut frame = Frame::filled(320, 240, [120, 120, 120]);
    for y in 100..150 {
        for x in 100..150 {
            frame.put_pixel(x, y, [20, 20, 20]);
        }
    }
    frame
}

fn scripted_detector() -> FnDetector<impl Fn(&FrameView<'_>) -> Detection> {
    FnDetector::new(|_: &FrameView<'_>| Detection {
        markers: vec![Marker {
            id: 23,
            corners: [
                Point2::new(100.0, 100.0),
                Point2::new(100.0, 150.0),
                Point2::new(150.0, 150.0),
                Point2::new(150.0, 100.0),
            ],
        }],
    })
}
