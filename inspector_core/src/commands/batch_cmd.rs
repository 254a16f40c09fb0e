// inspector_core/src/commands/batch_cmd.rs
use crate::commands::command_manager::Command;

/// Several edits made in the same frame, undone as one history entry.
#[derive(Debug)]
pub struct BatchCmd {
    commands: Vec<Box<dyn Command>>,
}

impl BatchCmd {
    pub fn new(commands: Vec<Box<dyn Command>>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for BatchCmd {
    fn execute(&mut self) {
        for command in self.commands.iter_mut() {
            command.execute();
        }
    }

    fn undo(&mut self) {
        for command in self.commands.iter_mut().rev() {
            command.undo();
        }
    }

    fn is_alive(&self) -> bool {
        self.commands.iter().any(|c| c.is_alive())
    }
}
