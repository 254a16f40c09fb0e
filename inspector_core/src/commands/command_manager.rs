// inspector_core/src/commands/command_manager.rs
use std::fmt::Debug;

/// Trait for every undoable command.
pub trait Command: Debug {
    fn execute(&mut self);
    fn undo(&mut self);

    /// False once the object the command edits has been destroyed.
    fn is_alive(&self) -> bool {
        true
    }
}

/// Linear undo/redo history.
///
/// Entries before `cursor` are applied, entries from `cursor` on have been
/// undone and can be redone.
#[derive(Debug, Default)]
pub struct CommandManager {
    entries: Vec<Box<dyn Command>>,
    cursor: usize,
    /// Oldest entries are dropped past this many.
    limit: Option<usize>,
}

impl CommandManager {
    /// Returns an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty history that keeps at most `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.filter(|l| *l > 0),
            ..Self::default()
        }
    }

    /// Execute the command and record it. Anything that could be redone is discarded.
    pub fn commit(&mut self, mut command: Box<dyn Command>) {
        if !command.is_alive() {
            log::warn!("Dropping {command:?}: target no longer exists.");
            return;
        }

        command.execute();
        self.entries.truncate(self.cursor);
        self.entries.push(command);
        self.cursor += 1;

        if let Some(limit) = self.limit {
            if self.entries.len() > limit {
                let overflow = self.entries.len() - limit;
                self.entries.drain(..overflow);
                self.cursor -= overflow;
            }
        }
    }

    /// Undo the latest applied command. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        while self.cursor > 0 {
            self.cursor -= 1;
            if !self.entries[self.cursor].is_alive() {
                let stale = self.entries.remove(self.cursor);
                log::warn!("Dropping {stale:?} from history: target no longer exists.");
                continue;
            }
            self.entries[self.cursor].undo();
            return true;
        }
        false
    }

    /// Reapply the latest undone command. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        while self.cursor < self.entries.len() {
            if !self.entries[self.cursor].is_alive() {
                let stale = self.entries.remove(self.cursor);
                log::warn!("Dropping {stale:?} from history: target no longer exists.");
                continue;
            }
            self.entries[self.cursor].execute();
            self.cursor += 1;
            return true;
        }
        false
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Forget the whole history without touching any object.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
