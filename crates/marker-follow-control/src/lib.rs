//! The input/control bridge: map key symbols to actuator commands.
//!
//! This is the live-demo side channel. A [`ControlBridge`] reads symbolic
//! keys from a [`KeySource`], looks each one up in a fixed [`KeyMap`] and
//! issues the mapped [`Command`] to an [`Actuator`] synchronously — at most
//! one command is pending at any time. The land command additionally flips
//! the shared cancellation token so the concurrently running acquisition
//! activity observes the stop and exits promptly.

mod actuator;
mod bridge;
mod command;
mod keymap;

pub use actuator::{Actuator, ActuatorError};
pub use bridge::{ControlBridge, KeySource};
pub use command::Command;
pub use keymap::KeyMap;
