// editor/src/scene/components.rs
use inspector_core::components::EntityId;
use inspector_core::inspector::drawer::read_as;
use inspector_core::inspector::{DrawContext, Drawer, Edit, EditCollector};
use inspector_core::inspector_drawer;
use glam::Vec3;
use inspector_core::reflect::FieldValue;
use inspector_core::ui::Constraints;
use reflect_derive::Reflect;
use std::any::TypeId;

/// Spawns enemies around its owner. Drawn by the generic drawer.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Spawner {
    pub speed: f32,
    pub name: String,
    #[reflect(min = 0, max = 64)]
    pub max_alive: i32,
    pub owner: EntityId,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            speed: 5.0,
            name: "Foo".to_string(),
            max_alive: 4,
            owner: EntityId::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 10.0,
            range: 8.0,
        }
    }
}

/// Intensity first, as a slider, then color and range.
#[derive(Default)]
pub struct PointLightDrawer;

inspector_drawer!(PointLightDrawer);

impl Drawer for PointLightDrawer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<PointLight>()
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
        let Some(light) = read_as(object, |l: &PointLight| l.clone()) else {
            return Edit::Unchanged;
        };

        if !ctx.ui.begin_section(label) {
            return Edit::Unchanged;
        }

        let slider = Constraints {
            range: Some((0.0, 100.0)),
            widget_hint: Some("slider"),
            read_only: false,
        };

        let mut edits = EditCollector::new(ctx.collapse);
        edits.extend(ctx.edit_field(
            object,
            "Intensity",
            light.intensity,
            slider,
            |l: &mut PointLight, v: f32| l.intensity = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Color",
            light.color,
            Constraints::range(0.0, 1.0),
            |l: &mut PointLight, v: Vec3| l.color = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Range",
            light.range,
            Constraints::range(0.0, 1000.0),
            |l: &mut PointLight, v: f32| l.range = v,
        ));

        ctx.ui.end_section();
        edits.finish()
    }
}
