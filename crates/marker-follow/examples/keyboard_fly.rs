//! Live teleoperation demo wiring.
//!
//! Two concurrent activities coordinated only by the shared cancellation
//! token, exactly like the reference drone demo:
//!
//! - the acquisition activity runs the overlay loop on a managed
//!   background task over a paced synthetic video source,
//! - this thread polls a key source and drives the control bridge; the
//!   `l` key lands, flips the token and the task is joined before the
//!   source (the stand-in for the camera stream) is torn down.
//!
//! Pass a key string as the first argument (default `wqesl`). The actuator
//! is a logging mock; the `Actuator` trait is where a drone SDK plugs in.

use std::{env, thread, time::Duration};

use log::{info, LevelFilter};
use nalgebra::Point2;

use marker_follow::core::init_with_level;
use marker_follow::{
    AcquisitionTask, Actuator, ActuatorError, CancelToken, Command, ControlBridge, Detection,
    FnDetector, Frame, FrameSource, FrameView, KeyMap, KeySource, Marker, NullSink, OverlayLoop,
    OverlayParams, SourceError,
};

/// Paced synthetic video stream; stands in for a camera-bearing device.
struct SyntheticStream {
    frame: Frame,
}

impl FrameSource for SyntheticStream {
    fn next_frame(&mut self) -> Result<Frame, SourceError> {
        thread::sleep(Duration::from_millis(10));
        Ok(self.frame.clone())
    }
}

/// Logs every command instead of flying a real device.
struct LoggingActuator;

impl LoggingActuator {
    fn log(&self, what: &str) -> Result<(), ActuatorError> {
        info!("actuator: {what}");
        Ok(())
    }
}

impl Actuator for LoggingActuator {
    fn take_off(&mut self) -> Result<(), ActuatorError> {
        self.log("take off")
    }
    fn land(&mut self) -> Result<(), ActuatorError> {
        self.log("land")
    }
    fn fly_forward(&mut self, distance_cm: u32) -> Result<(), ActuatorError> {
        self.log(&format!("fly forward {distance_cm} cm"))
    }
    fn fly_backward(&mut self, distance_cm: u32) -> Result<(), ActuatorError> {
        self.log(&format!("fly backward {distance_cm} cm"))
    }
    fn rotate_clockwise(&mut self, degrees: u32) -> Result<(), ActuatorError> {
        self.log(&format!("rotate clockwise {degrees} deg"))
    }
    fn rotate_counter_clockwise(&mut self, degrees: u32) -> Result<(), ActuatorError> {
        self.log(&format!("rotate counter-clockwise {degrees} deg"))
    }
}

/// Replays a key string, pacing like a human operator.
struct ScriptedKeys {
    keys: std::vec::IntoIter<char>,
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Option<char> {
        thread::sleep(Duration::from_millis(50));
        self.keys.next()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Info)?;

    let keys: Vec<char> = env::args().nth(1).unwrap_or_else(|| "wqesl".into()).chars().collect();

    let token = CancelToken::new();
    let looper = OverlayLoop::new(
        scripted_detector(),
        NullSink,
        OverlayParams::default(),
        token.clone(),
    );
    let stream = SyntheticStream {
        frame: Frame::filled(360, 240, [80, 80, 80]),
    };
    let task = AcquisitionTask::spawn(looper, stream);

    let mut actuator = LoggingActuator;
    actuator.execute(Command::TakeOff)?;

    let mut bridge = ControlBridge::new(actuator, KeyMap::default(), token.clone());
    let issued = bridge.run(&mut ScriptedKeys {
        keys: keys.into_iter(),
    });
    info!("issued {issued} commands");

    // The bridge has landed (or the input closed): stop the acquisition
    // activity and wait for it before the stream goes away.
    token.cancel();
    let summary = task.join()?;
    info!(
        "presented {} frames, skipped {}",
        summary.frames_presented, summary.frames_skipped
    );
    Ok(())
}

fn scripted_detector() -> FnDetector<impl Fn(&FrameView<'_>) -> Detection> {
    FnDetector::new(|view: &FrameView<'_>| {
        let s = view.width.min(view.height) as f32 / 4.0;
        Detection {
            markers: vec![Marker {
                id: 1,
                corners: [
                    Point2::new(s, s),
                    Point2::new(s, 2.0 * s),
                    Point2::new(2.0 * s, 2.0 * s),
                    Point2::new(2.0 * s, s),
                ],
            }],
        }
    })
}
