use thiserror::Error;

use crate::command::Command;

/// Errors from the actuator channel.
///
/// A failed command is operator-visible (a flying device is at stake) but
/// must never terminate the opposing acquisition activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActuatorError {
    #[error("actuator link lost: {0}")]
    LinkLost(String),

    #[error("command rejected by device: {0}")]
    Rejected(String),
}

/// A connected external device accepting discrete motion commands.
///
/// Each method blocks until the device has accepted (or refused) the
/// command; no return payload beyond success/failure is modeled.
pub trait Actuator {
    fn take_off(&mut self) -> Result<(), ActuatorError>;
    fn land(&mut self) -> Result<(), ActuatorError>;
    fn fly_forward(&mut self, distance_cm: u32) -> Result<(), ActuatorError>;
    fn fly_backward(&mut self, distance_cm: u32) -> Result<(), ActuatorError>;
    fn rotate_clockwise(&mut self, degrees: u32) -> Result<(), ActuatorError>;
    fn rotate_counter_clockwise(&mut self, degrees: u32) -> Result<(), ActuatorError>;

    /// Dispatch one [`Command`] to the matching method.
    fn execute(&mut self, command: Command) -> Result<(), ActuatorError> {
        match command {
            Command::TakeOff => self.take_off(),
            Command::Land => self.land(),
            Command::FlyForward { distance_cm } => self.fly_forward(distance_cm),
            Command::FlyBackward { distance_cm } => self.fly_backward(distance_cm),
            Command::RotateClockwise { degrees } => self.rotate_clockwise(degrees),
            Command::RotateCounterClockwise { degrees } => self.rotate_counter_clockwise(degrees),
        }
    }
}
