use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Fixed symbol → command table.
///
/// Unbound symbols are no-ops. The default bindings follow the reference
/// teleoperation demo: `w`/`s` fly forward/backward 20 cm, `q`/`e` rotate
/// counter-clockwise/clockwise 15 degrees, `l` lands and ends the demo.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyMap {
    bindings: Vec<(char, Command)>,
}

impl KeyMap {
    pub fn new(bindings: Vec<(char, Command)>) -> Self {
        Self { bindings }
    }

    /// Look a key symbol up; first binding wins.
    pub fn lookup(&self, key: char) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, cmd)| *cmd)
    }

    pub fn bindings(&self) -> &[(char, Command)] {
        &self.bindings
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(vec![
            ('w', Command::FlyForward { distance_cm: 20 }),
            ('s', Command::FlyBackward { distance_cm: 20 }),
            ('q', Command::RotateCounterClockwise { degrees: 15 }),
            ('e', Command::RotateClockwise { degrees: 15 }),
            ('l', Command::Land),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_match_reference_demo() {
        let map = KeyMap::default();
        assert_eq!(map.lookup('w'), Some(Command::FlyForward { distance_cm: 20 }));
        assert_eq!(map.lookup('s'), Some(Command::FlyBackward { distance_cm: 20 }));
        assert_eq!(
            map.lookup('q'),
            Some(Command::RotateCounterClockwise { degrees: 15 })
        );
        assert_eq!(map.lookup('e'), Some(Command::RotateClockwise { degrees: 15 }));
        assert_eq!(map.lookup('l'), Some(Command::Land));
    }

    #[test]
    fn unbound_keys_are_no_ops() {
        let map = KeyMap::default();
        assert_eq!(map.lookup('x'), None);
        assert_eq!(map.lookup(' '), None);
        // bindings are case-sensitive symbols
        assert_eq!(map.lookup('W'), None);
    }

    #[test]
    fn serde_roundtrip_preserves_bindings() {
        let map = KeyMap::default();
        let json = serde_json::to_string(&map).unwrap();
        let back: KeyMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lookup('l'), Some(Command::Land));
        assert_eq!(back.bindings().len(), map.bindings().len());
    }
}
