//! Cross-thread behavior of the managed acquisition task.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use nalgebra::Point2;

use marker_follow_core::{Detection, FnDetector, Frame, FrameView, Marker};
use marker_follow_overlay::{
    AcquisitionTask, CancelToken, FrameSource, OverlayLoop, OverlayParams, PresentError,
    PresentationSink, SourceError,
};

const TICK: Duration = Duration::from_millis(2);

/// Produces copies of one frame forever, pacing like a capture device.
struct EndlessSource {
    frame: Frame,
    dropped: Option<Arc<AtomicBool>>,
}

impl EndlessSource {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            dropped: None,
        }
    }

    fn with_drop_probe(frame: Frame, probe: Arc<AtomicBool>) -> Self {
        Self {
            frame,
            dropped: Some(probe),
        }
    }
}

impl FrameSource for EndlessSource {
    fn next_frame(&mut self) -> Result<Frame, SourceError> {
        thread::sleep(TICK);
        Ok(self.frame.clone())
    }
}

impl Drop for EndlessSource {
    fn drop(&mut self) {
        if let Some(probe) = &self.dropped {
            probe.store(true, Ordering::SeqCst);
        }
    }
}

/// Counts presents through a shared counter the test thread can watch.
struct CountingSink {
    presented: Arc<AtomicU64>,
}

impl PresentationSink for CountingSink {
    fn present(&mut self, _frame: &Frame) -> Result<(), PresentError> {
        self.presented.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn scripted_detector() -> FnDetector<impl Fn(&FrameView<'_>) -> Detection> {
    FnDetector::new(|_: &FrameView<'_>| Detection {
        markers: vec![Marker {
            id: 5,
            corners: [
                Point2::new(10.0, 10.0),
                Point2::new(10.0, 30.0),
                Point2::new(30.0, 30.0),
                Point2::new(30.0, 10.0),
            ],
        }],
    })
}

fn wait_for(counter: &AtomicU64, at_least: u64) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while counter.load(Ordering::SeqCst) < at_least {
        assert!(Instant::now() < deadline, "acquisition task never presented");
        thread::sleep(TICK);
    }
}

#[test]
fn cancel_stops_presentation_within_one_poll() {
    let presented = Arc::new(AtomicU64::new(0));
    let token = CancelToken::new();

    let looper = OverlayLoop::new(
        scripted_detector(),
        CountingSink {
            presented: presented.clone(),
        },
        OverlayParams::default(),
        token.clone(),
    );
    let task = AcquisitionTask::spawn(looper, EndlessSource::new(Frame::filled(64, 64, [0; 3])));

    wait_for(&presented, 3);

    assert!(token.cancel());
    let at_cancel = presented.load(Ordering::SeqCst);

    // At most the frame already in flight may still be presented.
    thread::sleep(TICK * 20);
    let settled = presented.load(Ordering::SeqCst);
    assert!(
        settled <= at_cancel + 1,
        "counter kept increasing after cancel: {at_cancel} -> {settled}"
    );

    let summary = task.join().expect("loop exits cleanly");
    assert_eq!(summary.frames_presented, presented.load(Ordering::SeqCst));
}

#[test]
fn join_releases_the_source_before_returning() {
    let released = Arc::new(AtomicBool::new(false));
    let presented = Arc::new(AtomicU64::new(0));

    let looper = OverlayLoop::new(
        scripted_detector(),
        CountingSink {
            presented: presented.clone(),
        },
        OverlayParams::default(),
        CancelToken::new(),
    );
    let source =
        EndlessSource::with_drop_probe(Frame::filled(32, 32, [0; 3]), released.clone());
    let task = AcquisitionTask::spawn(looper, source);

    wait_for(&presented, 1);

    task.cancel_and_join().expect("loop exits cleanly");
    assert!(
        released.load(Ordering::SeqCst),
        "source must be dropped before join returns"
    );
}
