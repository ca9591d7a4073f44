use log::{error, info};

use marker_follow_overlay::CancelToken;

use crate::actuator::{Actuator, ActuatorError};
use crate::command::Command;
use crate::keymap::KeyMap;

/// Blocking keyboard-style input: yields one symbolic key per call,
/// `None` when the input device has closed.
pub trait KeySource {
    fn read_key(&mut self) -> Option<char>;
}

/// Maps key symbols to actuator commands, synchronously with detection.
///
/// The bridge shares only the [`CancelToken`] with the acquisition
/// activity. A land command flips the token so the acquisition loop
/// observes the stop within one polling interval; everything else leaves
/// the token alone.
pub struct ControlBridge<A> {
    actuator: A,
    map: KeyMap,
    cancel: CancelToken,
}

impl<A: Actuator> ControlBridge<A> {
    pub fn new(actuator: A, map: KeyMap, cancel: CancelToken) -> Self {
        Self {
            actuator,
            map,
            cancel,
        }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Handle one key symbol.
    ///
    /// Unbound symbols and any key after the stop flag is down are no-ops.
    /// A land key cancels the token even when the land call itself fails —
    /// a flying device must still end the demo — and the error is returned
    /// so the operator sees it.
    pub fn handle_key(&mut self, key: char) -> Result<Option<Command>, ActuatorError> {
        if self.cancel.is_cancelled() {
            return Ok(None);
        }
        let Some(command) = self.map.lookup(key) else {
            return Ok(None);
        };

        let result = self.actuator.execute(command);
        if command.is_terminal() && self.cancel.cancel() {
            info!(target: "control", "land issued, stopping the demo");
        }
        result.map(|_| Some(command))
    }

    /// Poll the key source until a land is handled, the token is cancelled
    /// externally, or the input closes. Returns the number of commands
    /// issued.
    ///
    /// Per-command failures are logged and polling continues; they never
    /// terminate the opposing acquisition activity.
    pub fn run(&mut self, keys: &mut impl KeySource) -> usize {
        let mut issued = 0;
        while !self.cancel.is_cancelled() {
            let Some(key) = keys.read_key() else {
                break;
            };
            match self.handle_key(key) {
                Ok(Some(_)) => issued += 1,
                Ok(None) => {}
                Err(err) => {
                    issued += 1;
                    error!(target: "control", "command failed: {err}");
                }
            }
        }
        issued
    }

    /// Hand the actuator back, e.g. for teardown after the demo.
    pub fn into_actuator(self) -> A {
        self.actuator
    }
}
