// inspector_core/src/commands/reflect_set_cmd.rs
use crate::commands::command_manager::Command;
use crate::reflect::{FieldValue, Settable};
use std::fmt;

/// Undo-able edit that writes a field by name, for objects drawn without a
/// static type.
pub struct ReflectSetCmd {
    settable: Settable,
    old: FieldValue,
    new: FieldValue,
}

impl ReflectSetCmd {
    /// Returns `None` when the edit would not change anything.
    pub fn new(settable: Settable, old: FieldValue, new: FieldValue) -> Option<Self> {
        if old == new {
            return None;
        }
        Some(Self { settable, old, new })
    }

    pub fn field(&self) -> &'static str {
        self.settable.field()
    }

    pub fn old(&self) -> &FieldValue {
        &self.old
    }

    pub fn new_value(&self) -> &FieldValue {
        &self.new
    }

    fn write(&self, value: FieldValue) {
        if let Err(e) = self.settable.set(value) {
            log::warn!("Could not set {:?}: {e}.", self.settable);
        }
    }
}

impl Command for ReflectSetCmd {
    fn execute(&mut self) {
        self.write(self.new.clone());
    }

    fn undo(&mut self) {
        self.write(self.old.clone());
    }

    fn is_alive(&self) -> bool {
        self.settable.is_alive()
    }
}

impl fmt::Debug for ReflectSetCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {:?} {:?} -> {:?}", self.settable, self.old, self.new)
    }
}
