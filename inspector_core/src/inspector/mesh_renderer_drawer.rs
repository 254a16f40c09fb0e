// inspector_core/src/inspector/mesh_renderer_drawer.rs
use crate::components::{CullMode, MeshRenderer};
use crate::inspector::drawer::{DrawContext, Drawer, Edit, read_as};
use crate::inspector::edits::EditCollector;
use crate::reflect::{AssetId, FieldValue};
use crate::ui::Constraints;
use std::any::TypeId;

#[derive(Clone, Copy, Debug, Default)]
pub struct MeshRendererDrawer;

impl Drawer for MeshRendererDrawer {
    fn target_type(&self) -> TypeId {
        TypeId::of::<MeshRenderer>()
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
        let Some(renderer) = read_as(object, |r: &MeshRenderer| r.clone()) else {
            return Edit::Unchanged;
        };

        if !ctx.ui.begin_section(label) {
            return Edit::Unchanged;
        }

        let mut edits = EditCollector::new(ctx.collapse);
        edits.extend(ctx.edit_field(
            object,
            "Wireframe",
            renderer.wireframe,
            Constraints::default(),
            |r: &mut MeshRenderer, v: bool| r.wireframe = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Cull Mode",
            renderer.cull_mode,
            Constraints::default(),
            |r: &mut MeshRenderer, v: CullMode| r.cull_mode = v,
        ));
        edits.extend(ctx.edit_field(
            object,
            "Texture",
            renderer.texture,
            Constraints::default(),
            |r: &mut MeshRenderer, v: Option<AssetId>| r.texture = v,
        ));

        ctx.ui.end_section();
        edits.finish()
    }
}
