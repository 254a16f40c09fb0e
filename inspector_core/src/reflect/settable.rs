// inspector_core/src/reflect/settable.rs
use crate::reflect::{FieldValue, Reflect, ReflectError, SharedObject};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// An assignable location: one field of one object, resolved once.
#[derive(Clone)]
pub struct Settable {
    target: Weak<RefCell<dyn Reflect>>,
    type_name: &'static str,
    field: &'static str,
}

impl Settable {
    pub fn new(target: &SharedObject, field: &'static str) -> Self {
        let type_name = target
            .try_borrow()
            .map(|t| t.type_name())
            .unwrap_or("<busy>");
        Self {
            target: Rc::downgrade(target),
            type_name,
            field,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns true while the target object is still alive.
    pub fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    pub fn get(&self) -> Result<FieldValue, ReflectError> {
        let target = self.target.upgrade().ok_or(ReflectError::TargetDropped)?;
        let target = target.try_borrow().map_err(|_| ReflectError::Borrowed)?;
        target.get_field(self.field).ok_or_else(|| ReflectError::UnknownField {
            type_name: self.type_name,
            field: self.field.to_string(),
        })
    }

    pub fn set(&self, value: FieldValue) -> Result<(), ReflectError> {
        let target = self.target.upgrade().ok_or(ReflectError::TargetDropped)?;
        let mut target = target.try_borrow_mut().map_err(|_| ReflectError::Borrowed)?;
        target.set_field(self.field, value)
    }
}

impl fmt::Debug for Settable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.type_name, self.field)
    }
}
