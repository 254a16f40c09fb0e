// inspector_core/src/commands/set_value_cmd.rs
use crate::commands::command_manager::Command;
use crate::reflect::{Reflect, SharedObject};
use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::{Rc, Weak};

type Setter<T> = Box<dyn Fn(&mut dyn Reflect, T)>;

/// Undo-able edit that goes through a typed setter.
pub struct SetValueCmd<T> {
    target: Weak<RefCell<dyn Reflect>>,
    label: &'static str,
    apply: Setter<T>,
    old: T,
    new: T,
}

impl<T> SetValueCmd<T>
where
    T: Clone + PartialEq + Debug + 'static,
{
    /// Builds the command for a field of the concrete type `O`.
    /// Returns `None` when the edit would not change anything.
    pub fn new<O: Reflect>(
        target: &SharedObject,
        label: &'static str,
        old: T,
        new: T,
        setter: fn(&mut O, T),
    ) -> Option<Self> {
        Self::from_fn(target, label, old, new, move |object: &mut dyn Reflect, value: T| {
            match object.as_any_mut().downcast_mut::<O>() {
                Some(object) => setter(object, value),
                None => log::warn!("{label}: target is not a {}.", std::any::type_name::<O>()),
            }
        })
    }

    /// Builds the command around an arbitrary setter.
    pub fn from_fn(
        target: &SharedObject,
        label: &'static str,
        old: T,
        new: T,
        apply: impl Fn(&mut dyn Reflect, T) + 'static,
    ) -> Option<Self> {
        if old == new {
            return None;
        }
        Some(Self {
            target: Rc::downgrade(target),
            label,
            apply: Box::new(apply),
            old,
            new,
        })
    }

    pub fn old(&self) -> &T {
        &self.old
    }

    pub fn new_value(&self) -> &T {
        &self.new
    }

    fn set(&self, value: T) {
        let Some(target) = self.target.upgrade() else {
            log::debug!("{}: target no longer exists.", self.label);
            return;
        };
        match target.try_borrow_mut() {
            Ok(mut target) => (self.apply)(&mut *target, value),
            Err(_) => log::warn!("{}: target is busy, edit skipped.", self.label),
        }
    }
}

impl<T> Command for SetValueCmd<T>
where
    T: Clone + PartialEq + Debug + 'static,
{
    fn execute(&mut self) {
        self.set(self.new.clone());
    }

    fn undo(&mut self) {
        self.set(self.old.clone());
    }

    fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }
}

impl<T: Debug> Debug for SetValueCmd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set {} {:?} -> {:?}", self.label, self.old, self.new)
    }
}
