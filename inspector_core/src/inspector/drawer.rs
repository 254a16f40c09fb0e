// inspector_core/src/inspector/drawer.rs
use crate::commands::{Command, SetValueCmd};
use crate::inspector::drawer_cache::DrawerCache;
use crate::inspector::edits::EditCollapse;
use crate::reflect::{FieldValue, Reflect, ReflectField, SharedObject};
use crate::ui::{Constraints, InspectorUi};
use std::any::TypeId;
use std::fmt::Debug;

/// Nested objects deeper than this are not drawn.
pub const MAX_DEPTH: usize = 8;

/// What a drawer reports back after drawing one value.
#[derive(Debug)]
pub enum Edit {
    Unchanged,
    /// A plain value was changed. The caller decides how to write it back.
    Value(FieldValue),
    /// The drawer already built the command for its edit.
    Command(Box<dyn Command>),
}

impl Edit {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Edit::Unchanged)
    }

    /// The command carried by the edit, if any.
    pub fn into_command(self) -> Option<Box<dyn Command>> {
        match self {
            Edit::Command(command) => Some(command),
            Edit::Value(value) => {
                log::debug!("Dropping loose value {value:?}: no field to write it to.");
                None
            }
            Edit::Unchanged => None,
        }
    }
}

/// Everything a drawer needs besides the value itself.
pub struct DrawContext<'a> {
    pub ui: &'a mut dyn InspectorUi,
    pub drawers: &'a DrawerCache,
    pub collapse: EditCollapse,
    depth: usize,
}

impl<'a> DrawContext<'a> {
    pub fn new(ui: &'a mut dyn InspectorUi, drawers: &'a DrawerCache, collapse: EditCollapse) -> Self {
        Self {
            ui,
            drawers,
            collapse,
            depth: 0,
        }
    }

    /// Resolves the drawer for `value` and draws it one level deeper.
    pub fn draw_field(
        &mut self,
        label: &str,
        value: &FieldValue,
        declared: TypeId,
        constraints: &Constraints,
    ) -> Edit {
        if self.depth >= MAX_DEPTH {
            log::debug!("Skipping `{label}`: nested deeper than {MAX_DEPTH}.");
            return Edit::Unchanged;
        }

        let drawers = self.drawers;
        let drawer = drawers.resolve(value, declared);

        self.depth += 1;
        let edit = drawer.draw(label, value, constraints, self);
        self.depth -= 1;
        edit
    }

    /// Draws one strongly typed field of `object` and returns the command
    /// for the edit, if the user changed it.
    pub fn edit_field<O, T>(
        &mut self,
        object: &SharedObject,
        label: &'static str,
        current: T,
        constraints: Constraints,
        setter: fn(&mut O, T),
    ) -> Option<Box<dyn Command>>
    where
        O: Reflect,
        T: ReflectField + Clone + PartialEq + Debug + 'static,
    {
        let declared = T::field_info(label).declared;
        let value = current.to_value();

        match self.draw_field(label, &value, declared, &constraints) {
            Edit::Value(new) => {
                let new = T::from_value(new)?;
                SetValueCmd::new(object, label, current, new, setter)
                    .map(|cmd| Box::new(cmd) as Box<dyn Command>)
            }
            Edit::Command(command) => Some(command),
            Edit::Unchanged => None,
        }
    }
}

/// Draws and edits one category of value.
///
/// Drawers hold no per-object state, a single instance serves every value of its type.
pub trait Drawer {
    /// The exact type this drawer is registered for.
    fn target_type(&self) -> TypeId;

    /// Name used in logs. Defaults to the Rust type name.
    fn title(&self) -> &str {
        std::any::type_name::<Self>()
            .rsplit("::")
            .next()
            .unwrap_or("Drawer")
    }

    fn draw(
        &self,
        label: &str,
        value: &FieldValue,
        constraints: &Constraints,
        ctx: &mut DrawContext,
    ) -> Edit;
}

/// Runs `f` on the object if it is an `O`.
pub fn read_as<O: Reflect, R>(object: &SharedObject, f: impl FnOnce(&O) -> R) -> Option<R> {
    let object = object.try_borrow().ok()?;
    object.as_any().downcast_ref::<O>().map(f)
}
