// editor/src/session/session.rs
use crate::controls::controls::FrameInput;
use crate::editor::Editor;
use inspector_core::ui::{ScriptValue, ScriptedUi};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Recording bundled with the binary, replayed when no path is given.
pub const DEMO_SESSION: &str = include_str!("../../sessions/demo.ron");

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Could not read session file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed session: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// One recorded frame: window input plus the values typed into controls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    pub input: FrameInput,
    /// Control label or section path, and the value entered there.
    pub edits: Vec<(String, ScriptValue)>,
}

/// A replayable list of frames.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub frames: Vec<Frame>,
}

impl Session {
    pub fn from_ron(text: &str) -> Result<Self, SessionError> {
        Ok(ron::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn demo() -> Result<Self, SessionError> {
        Self::from_ron(DEMO_SESSION)
    }

    /// Feeds every frame to the editor. Returns the number of frames run.
    pub fn run(&self, editor: &mut Editor) -> usize {
        for (index, frame) in self.frames.iter().enumerate() {
            let mut ui = ScriptedUi::new();
            for (key, value) in &frame.edits {
                ui.queue_edit(key.clone(), value.clone());
            }

            editor.update(&frame.input, &mut ui);

            if ui.pending_edits() > 0 {
                log::warn!(
                    "Frame {index}: {} scripted edit(s) matched no control.",
                    ui.pending_edits()
                );
            }
        }
        self.frames.len()
    }
}
