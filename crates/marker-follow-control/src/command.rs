use serde::{Deserialize, Serialize};

/// A discrete directive for the actuator channel.
///
/// Fire-and-forget from the bridge's point of view: issuance is blocking,
/// but no acknowledgment payload is consumed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Command {
    FlyForward { distance_cm: u32 },
    FlyBackward { distance_cm: u32 },
    RotateClockwise { degrees: u32 },
    RotateCounterClockwise { degrees: u32 },
    TakeOff,
    Land,
}

impl Command {
    /// Whether this command also ends the demo (RUNNING → STOPPED).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Command::Land)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_land_is_terminal() {
        assert!(Command::Land.is_terminal());
        assert!(!Command::TakeOff.is_terminal());
        assert!(!Command::FlyForward { distance_cm: 20 }.is_terminal());
        assert!(!Command::RotateClockwise { degrees: 15 }.is_terminal());
    }

    #[test]
    fn serde_shape_is_tagged() {
        let json = serde_json::to_string(&Command::FlyForward { distance_cm: 20 }).unwrap();
        assert_eq!(json, r#"{"kind":"fly_forward","distance_cm":20}"#);
        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Command::FlyForward { distance_cm: 20 });
    }
}
