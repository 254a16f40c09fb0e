// inspector_core/src/inspector/transform_drawer.rs
use crate::components::Transform;
use crate::inspector::drawer::{DrawContext, Drawer, Edit, read_as};
use crate::inspector::edits::EditCollector;
use crate::reflect::FieldValue;
use crate::ui::Constraints;
use std::any::TypeId;
use glam::Vec3;

/// Position, rotation and scale, in that order.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformDrawer;

impl Drawer for TransformDrawer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<Transform>()
    }

    fn draw(
        &self,
        label: &str,
        value: &FieldValue,
        _constraints: &Constraints,
        ctx: &mut DrawContext,
    ) -> Edit {
        let FieldValue::Object(object) = value else {
            return Edit::Unchanged;
        };
        let Some(transform) = read_as(object, |t: &Transform| t.clone()) else {
            return Edit::Unchanged;
        };

        if !ctx.ui.begin_section(label) {
            return Edit::Unchanged;
        }

        let mut edits = EditCollector::new(ctx.collapse);
        edits.extend(ctx.edit_field(
            object,
            "Position",
            transform.position,
            Constraints::default(),
            |t: &mut Transform, v: Vec3| t.position = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Rotation",
            transform.rotation,
            Constraints::range(-360.0, 360.0),
            |t: &mut Transform, v: Vec3| t.rotation = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Scale",
            transform.scale,
            Constraints::default(),
            |t: &mut Transform, v: Vec3| t.scale = v,
        ));

        ctx.ui.end_section();
        edits.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::CommandManager;
    use crate::components::Transform;
    use crate::inspector::Inspector;
    use crate::reflect::SharedObject;
    use crate::ui::{ScriptValue, ScriptedUi};
    use glam::Vec3;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn rotation_is_limited_to_a_full_turn() {
        let transform = Rc::new(RefCell::new(Transform::default()));
        let shared: SharedObject = transform.clone();
        let mut ui = ScriptedUi::new().with_edit("Rotation", ScriptValue::Vec3([720.0, 0.0, -400.0]));

        let mut history = CommandManager::new();
        history.commit(Inspector::default().draw_object(&shared, &mut ui).unwrap());
        assert_eq!(transform.borrow().rotation, Vec3::new(360.0, 0.0, -360.0));
        assert_eq!(history.len(), 1);
    }
}
