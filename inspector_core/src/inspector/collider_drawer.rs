// inspector_core/src/inspector/collider_drawer.rs
use crate::components::Collider;
use crate::inspector::drawer::{DrawContext, Drawer, Edit, read_as};
use crate::inspector::edits::EditCollector;
use crate::reflect::FieldValue;
use crate::ui::Constraints;
use std::any::TypeId;
use glam::Vec3;

/// Mass, trigger flag and size. The physics body handle is not shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColliderDrawer;

impl Drawer for ColliderDrawer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<Collider>()
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
        let Some(collider) = read_as(object, |c: &Collider| c.clone()) else {
            return Edit::Unchanged;
        };

        if !ctx.ui.begin_section(label) {
            return Edit::Unchanged;
        }

        let mut edits = EditCollector::new(ctx.collapse);
        edits.extend(ctx.edit_field(
            object,
            "Mass",
            collider.mass,
            Constraints::range(0.0, f32::MAX),
            |c: &mut Collider, v: f32| c.mass = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Is Trigger",
            collider.is_trigger,
            Constraints::default(),
            |c: &mut Collider, v: bool| c.is_trigger = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Size",
            collider.size,
            Constraints::range(0.0, f32::MAX),
            |c: &mut Collider, v: Vec3| c.size = v,
        ));

        ctx.ui.end_section();
        edits.finish()
    }
}
