// editor/src/controls/controls.rs
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Z,
    Y,
    Delete,
}

/// One key press together with the modifiers held at the time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyChord {
    pub key: Key,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub shift: bool,
}

impl KeyChord {
    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true, shift: false }
    }

    pub fn ctrl_shift(key: Key) -> Self {
        Self { key, ctrl: true, shift: true }
    }
}

/// Everything the host window reports for one frame.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    /// Entity picked this frame, by name.
    pub select: Option<String>,
    /// Clears the selection.
    pub deselect: bool,
    /// Entity destroyed this frame, by name.
    pub delete: Option<String>,
    pub keys: Vec<KeyChord>,
}

impl FrameInput {
    fn pressed(&self, chord: KeyChord) -> bool {
        self.keys.contains(&chord)
    }
}

pub struct Controls;

impl Controls {
    pub fn undo(input: &FrameInput) -> bool {
        input.pressed(KeyChord::ctrl(Key::Z))
    }

    pub fn redo(input: &FrameInput) -> bool {
        input.pressed(KeyChord::ctrl_shift(Key::Z)) || input.pressed(KeyChord::ctrl(Key::Y))
    }

    pub fn delete(input: &FrameInput) -> bool {
        input.pressed(KeyChord { key: Key::Delete, ctrl: false, shift: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(keys: Vec<KeyChord>) -> FrameInput {
        FrameInput { keys, ..FrameInput::default() }
    }

    #[test]
    fn undo_needs_ctrl_without_shift() {
        assert!(Controls::undo(&frame(vec![KeyChord::ctrl(Key::Z)])));
        assert!(!Controls::undo(&frame(vec![KeyChord::ctrl_shift(Key::Z)])));
        assert!(!Controls::undo(&frame(vec![KeyChord { key: Key::Z, ctrl: false, shift: false }])));
    }

    #[test]
    fn redo_accepts_both_chords() {
        assert!(Controls::redo(&frame(vec![KeyChord::ctrl_shift(Key::Z)])));
        assert!(Controls::redo(&frame(vec![KeyChord::ctrl(Key::Y)])));
        assert!(!Controls::redo(&frame(vec![KeyChord::ctrl(Key::Z)])));
    }
}
