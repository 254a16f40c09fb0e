// editor/src/editor.rs
use crate::controls::controls::{Controls, FrameInput};
use crate::scene::scene::Scene;
use inspector_core::commands::{Command, CommandManager};
use inspector_core::inspector::{DrawerCache, Inspector};
use inspector_core::storage::editor_config::InspectorConfig;
use inspector_core::ui::InspectorUi;
use inspector_core::{onscreen_debug, onscreen_info, onscreen_warn};

/// Host of the inspector: owns the scene, the selection and the history.
pub struct Editor {
    pub scene: Scene,
    pub inspector: Inspector,
    pub history: CommandManager,
    selected: Option<String>,
    pending: Vec<Box<dyn Command>>,
    pending_undo: bool,
    pending_redo: bool,
}

impl Editor {
    pub fn new(scene: Scene, config: &InspectorConfig) -> Self {
        Self {
            scene,
            inspector: Inspector::new(DrawerCache::with_builtin(), config.collapse),
            history: CommandManager::with_limit(config.history_limit),
            selected: None,
            pending: Vec::new(),
            pending_undo: false,
            pending_redo: false,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Runs one frame: selection, inspector, then the history.
    pub fn update(&mut self, frame: &FrameInput, ui: &mut dyn InspectorUi) {
        self.apply_selection(frame);

        if Controls::undo(frame) {
            self.request_undo();
        }
        if Controls::redo(frame) {
            self.request_redo();
        }

        if let Some(command) = self.draw_selection(ui) {
            self.push_command(command);
        }

        self.apply_pending_commands();
    }

    /// Queues a command to be committed at the end of the frame.
    pub fn push_command(&mut self, command: Box<dyn Command>) {
        self.pending.push(command);
    }

    pub fn request_undo(&mut self) {
        self.pending_undo = true;
    }

    pub fn request_redo(&mut self) {
        self.pending_redo = true;
    }

    /// Commits everything queued this frame, then applies undo and redo requests.
    pub fn apply_pending_commands(&mut self) {
        for command in self.pending.drain(..) {
            onscreen_info!("{command:?}");
            self.history.commit(command);
        }

        if std::mem::take(&mut self.pending_undo) {
            if self.history.undo() {
                onscreen_info!("Undo ({} of {}).", self.history.cursor(), self.history.len());
            } else {
                onscreen_debug!("Nothing to undo.");
            }
        }

        if std::mem::take(&mut self.pending_redo) {
            if self.history.redo() {
                onscreen_info!("Redo ({} of {}).", self.history.cursor(), self.history.len());
            } else {
                onscreen_debug!("Nothing to redo.");
            }
        }
    }

    fn apply_selection(&mut self, frame: &FrameInput) {
        if frame.deselect {
            self.selected = None;
        }

        if let Some(name) = &frame.select {
            if self.scene.get(name).is_some() {
                self.selected = Some(name.clone());
            } else {
                onscreen_warn!("No entity named `{name}`.");
            }
        }

        let doomed = match (&frame.delete, Controls::delete(frame)) {
            (Some(name), _) => Some(name.clone()),
            (None, true) => self.selected.clone(),
            (None, false) => None,
        };
        if let Some(name) = doomed {
            if self.scene.remove(&name).is_some() {
                onscreen_info!("Deleted `{name}`.");
                if self.selected.as_deref() == Some(name.as_str()) {
                    self.selected = None;
                }
            }
        }
    }

    fn draw_selection(&self, ui: &mut dyn InspectorUi) -> Option<Box<dyn Command>> {
        let name = self.selected.as_deref()?;
        let entity = self.scene.get(name)?;
        self.inspector.draw_components(&entity.components, ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::controls::{Key, KeyChord};
    use crate::scene::scene::demo_scene;
    use inspector_core::reflect::FieldValue;
    use inspector_core::ui::{ScriptValue, ScriptedUi};

    fn editor() -> Editor {
        Editor::new(demo_scene(), &InspectorConfig::default())
    }

    fn select(name: &str) -> FrameInput {
        FrameInput {
            select: Some(name.to_string()),
            ..FrameInput::default()
        }
    }

    fn keys(keys: Vec<KeyChord>) -> FrameInput {
        FrameInput { keys, ..FrameInput::default() }
    }

    fn mass(editor: &Editor) -> Option<FieldValue> {
        editor.scene.field("Player", "Collider", "mass")
    }

    #[test]
    fn edit_then_undo_then_redo() {
        let mut editor = editor();
        let mut ui = ScriptedUi::new().with_edit("Collider/Mass", ScriptValue::Float(25.0));
        editor.update(&select("Player"), &mut ui);
        assert_eq!(mass(&editor), Some(FieldValue::Float(25.0)));
        assert_eq!(editor.history.len(), 1);

        editor.update(&keys(vec![KeyChord::ctrl(Key::Z)]), &mut ScriptedUi::new());
        assert_eq!(mass(&editor), Some(FieldValue::Float(1.0)));

        editor.update(&keys(vec![KeyChord::ctrl(Key::Y)]), &mut ScriptedUi::new());
        assert_eq!(mass(&editor), Some(FieldValue::Float(25.0)));
    }

    #[test]
    fn nothing_drawn_without_selection() {
        let mut editor = editor();
        let mut ui = ScriptedUi::new().with_edit("Mass", ScriptValue::Float(3.0));
        editor.update(&FrameInput::default(), &mut ui);
        assert!(ui.drawn().is_empty());
        assert!(editor.history.is_empty());
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut editor = editor();
        editor.update(&select("Ghost"), &mut ScriptedUi::new());
        assert_eq!(editor.selected(), None);
    }

    #[test]
    fn edit_is_committed_before_undo_in_the_same_frame() {
        let mut editor = editor();
        let mut frame = select("Player");
        frame.keys.push(KeyChord::ctrl(Key::Z));
        let mut ui = ScriptedUi::new().with_edit("Mass", ScriptValue::Float(4.0));
        editor.update(&frame, &mut ui);

        assert_eq!(mass(&editor), Some(FieldValue::Float(1.0)));
        assert!(editor.history.can_redo());
    }

    #[test]
    fn deleting_the_selection_leaves_stale_history() {
        let mut editor = editor();
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(9.0));
        editor.update(&select("Spawner"), &mut ui);
        assert_eq!(editor.history.len(), 1);

        editor.update(&keys(vec![KeyChord { key: Key::Delete, ctrl: false, shift: false }]), &mut ScriptedUi::new());
        assert_eq!(editor.selected(), None);
        assert!(editor.scene.get("Spawner").is_none());

        editor.request_undo();
        editor.apply_pending_commands();
        assert!(editor.history.is_empty());
    }
}
