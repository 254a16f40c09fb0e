// inspector_core/src/inspector/primitive.rs
use crate::inspector::drawer::{DrawContext, Drawer, Edit};
use crate::inspector::drawer_cache::DrawerCache;
use crate::reflect::{AssetId, EnumValue, FieldValue};
use crate::ui::Constraints;
use std::any::TypeId;
use std::marker::PhantomData;
use glam::Vec3;

/// One labeled control for a plain value of type `T`.
pub struct PrimitiveDrawer<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for PrimitiveDrawer<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: 'static> Drawer for PrimitiveDrawer<T> {
    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn title(&self) -> &str {
        std::any::type_name::<T>()
    }

    fn draw(
        &self,
        label: &str,
        value: &FieldValue,
        constraints: &Constraints,
        ctx: &mut DrawContext,
    ) -> Edit {
        let Some(new) = ctx.ui.labeled_control(label, value, constraints) else {
            return Edit::Unchanged;
        };

        if !new.same_kind(value) {
            log::debug!("`{label}` returned {new:?} for a {} control.", value.kind_name());
            return Edit::Unchanged;
        }

        let new = new.clamped(constraints.range);
        if new == *value {
            return Edit::Unchanged;
        }
        Edit::Value(new)
    }
}

/// Adds a control drawer for every primitive the reflection model knows.
pub fn register_primitive_drawers(cache: &mut DrawerCache) {
    cache.add_drawer(Box::new(PrimitiveDrawer::<f32>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<i32>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<bool>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<String>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<Vec3>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<EnumValue>::default()));
    cache.add_drawer(Box::new(PrimitiveDrawer::<AssetId>::default()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::edits::EditCollapse;
    use crate::ui::{ScriptValue, ScriptedUi};

    fn draw(ui: &mut ScriptedUi, value: FieldValue, constraints: Constraints) -> Edit {
        let cache = DrawerCache::with_builtin();
        let mut ctx = DrawContext::new(ui, &cache, EditCollapse::LastWins);
        PrimitiveDrawer::<f32>::default().draw("Speed", &value, &constraints, &mut ctx)
    }

    #[test]
    fn reports_changed_value() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(7.0));
        let edit = draw(&mut ui, FieldValue::Float(5.0), Constraints::default());
        assert!(matches!(edit, Edit::Value(FieldValue::Float(v)) if v == 7.0));
    }

    #[test]
    fn same_value_is_unchanged() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(5.0));
        let edit = draw(&mut ui, FieldValue::Float(5.0), Constraints::default());
        assert!(edit.is_unchanged());
    }

    #[test]
    fn clamps_into_range() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(50.0));
        let edit = draw(&mut ui, FieldValue::Float(5.0), Constraints::range(0.0, 10.0));
        assert!(matches!(edit, Edit::Value(FieldValue::Float(v)) if v == 10.0));
    }

    #[test]
    fn clamped_to_current_is_unchanged() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(-4.0));
        let edit = draw(&mut ui, FieldValue::Float(0.0), Constraints::range(0.0, 10.0));
        assert!(edit.is_unchanged());
    }
}
