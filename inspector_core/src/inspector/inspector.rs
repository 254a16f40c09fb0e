// inspector_core/src/inspector/inspector.rs
use crate::commands::Command;
use crate::inspector::drawer::{DrawContext, Edit};
use crate::inspector::drawer_cache::{DrawerCache, fallback_type};
use crate::inspector::edits::{EditCollapse, EditCollector};
use crate::reflect::{FieldValue, SharedObject};
use crate::ui::{Constraints, InspectorUi, Style};

/// Entry point the host editor calls once per frame for the selection.
pub struct Inspector {
    drawers: DrawerCache,
    collapse: EditCollapse,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(DrawerCache::with_builtin(), EditCollapse::default())
    }
}

impl Inspector {
    pub fn new(drawers: DrawerCache, collapse: EditCollapse) -> Self {
        Self { drawers, collapse }
    }

    pub fn set_collapse(&mut self, collapse: EditCollapse) {
        self.collapse = collapse;
    }

    /// Draws one object and returns the command for the user's edit, if any.
    /// The caller commits it.
    pub fn draw_object(
        &self,
        object: &SharedObject,
        ui: &mut dyn InspectorUi,
    ) -> Option<Box<dyn Command>> {
        self.draw(object, ui).into_command()
    }

    /// Draws every component of an entity, top to bottom.
    /// At most one command is returned, folded by the collapse policy.
    pub fn draw_components(
        &self,
        components: &[SharedObject],
        ui: &mut dyn InspectorUi,
    ) -> Option<Box<dyn Command>> {
        let mut edits = EditCollector::new(self.collapse);
        for component in components {
            edits.extend(self.draw(component, ui).into_command());
        }
        edits.finish().into_command()
    }

    fn draw(&self, object: &SharedObject, ui: &mut dyn InspectorUi) -> Edit {
        let title = match object.try_borrow() {
            Ok(object) => object.type_name(),
            Err(_) => {
                log::warn!("Selected object is busy, not drawn this frame.");
                return Edit::Unchanged;
            }
        };

        let value = FieldValue::Object(object.clone());
        let drawer = self.drawers.resolve(&value, fallback_type());

        ui.push_style(Style::Selected);
        let edit = {
            let mut ctx = DrawContext::new(ui, &self.drawers, self.collapse);
            drawer.draw(title, &value, &Constraints::default(), &mut ctx)
        };
        ui.pop_style();
        edit
    }
}
