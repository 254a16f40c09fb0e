// inspector_core/src/inspector/edits.rs
use crate::commands::{BatchCmd, Command};
use crate::inspector::drawer::Edit;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// What to do when several controls change during the same draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum EditCollapse {
    /// Keep the most recent edit and drop the others with a warning.
    #[default]
    LastWins,
    /// Record every edit of the frame as one history entry.
    Batch,
}

/// Gathers the commands produced while drawing one object.
pub struct EditCollector {
    policy: EditCollapse,
    commands: Vec<Box<dyn Command>>,
}

impl EditCollector {
    pub fn new(policy: EditCollapse) -> Self {
        Self {
            policy,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, command: Option<Box<dyn Command>>) {
        if let Some(command) = command {
            self.push(command);
        }
    }

    /// Folds everything collected into at most one command.
    pub fn finish(mut self) -> Edit {
        match self.commands.len() {
            0 => Edit::Unchanged,
            1 => self.commands.pop().map_or(Edit::Unchanged, Edit::Command),
            _ => match self.policy {
                EditCollapse::Batch => Edit::Command(Box::new(BatchCmd::new(self.commands))),
                EditCollapse::LastWins => {
                    let kept = self.commands.pop().map_or(Edit::Unchanged, Edit::Command);
                    log::warn!(
                        "{} edits in one frame, only the last is recorded. Dropped: {:?}.",
                        self.commands.len() + 1,
                        self.commands
                    );
                    kept
                }
            },
        }
    }
}
