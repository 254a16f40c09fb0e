// inspector_core/src/ui/scripted_ui.rs
use crate::reflect::{AssetId, FieldValue};
use crate::ui::widgets::{Constraints, InspectorUi, Style};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use glam::Vec3;

/// A value typed into a scripted control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScriptValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Text(String),
    Vec3([f32; 3]),
    /// Enum variant by name.
    Variant(String),
    Asset(Option<AssetId>),
}

impl ScriptValue {
    /// Converts the scripted value into the shape of `current`.
    /// Returns `None` when it does not fit the control.
    pub fn resolve(&self, current: &FieldValue) -> Option<FieldValue> {
        let value = match (self, current) {
            (ScriptValue::Float(f), FieldValue::Float(_)) => FieldValue::Float(*f),
            (ScriptValue::Int(i), FieldValue::Int(_)) => FieldValue::Int(*i),
            (ScriptValue::Float(f), FieldValue::Int(_)) => FieldValue::Int(f.round() as i32),
            (ScriptValue::Bool(b), FieldValue::Bool(_)) => FieldValue::Bool(*b),
            (ScriptValue::Text(t), FieldValue::Text(_)) => FieldValue::Text(t.clone()),
            (ScriptValue::Vec3(v), FieldValue::Vec3(_)) => FieldValue::Vec3(Vec3::from_array(*v)),
            (ScriptValue::Variant(name), FieldValue::Enum(e)) => FieldValue::Enum(e.with_variant(name)?),
            (ScriptValue::Asset(id), FieldValue::Asset(_)) => FieldValue::Asset(*id),
            _ => return None,
        };
        Some(value)
    }
}

/// Headless `InspectorUi` that replays queued edits and remembers what it drew.
///
/// Edits are keyed either by the bare control label (`"Mass"`) or by the
/// tail of its section path (`"Collider/Mass"`), and are consumed by the
/// first control they match.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    edits: Vec<(String, ScriptValue)>,
    collapsed: HashSet<String>,
    sections: Vec<String>,
    styles: Vec<Style>,
    drawn: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edit(mut self, key: impl Into<String>, value: ScriptValue) -> Self {
        self.queue_edit(key, value);
        self
    }

    pub fn queue_edit(&mut self, key: impl Into<String>, value: ScriptValue) {
        self.edits.push((key.into(), value));
    }

    /// Sections with this title report themselves closed.
    pub fn collapse(&mut self, title: impl Into<String>) {
        self.collapsed.insert(title.into());
    }

    /// Paths of every control drawn so far, e.g. `"Transform/Position"`.
    pub fn drawn(&self) -> &[String] {
        &self.drawn
    }

    /// Bare labels of every control drawn so far.
    pub fn drawn_labels(&self) -> Vec<&str> {
        self.drawn
            .iter()
            .map(|p| p.rsplit('/').next().unwrap_or(p))
            .collect()
    }

    /// Edits that no control has consumed yet.
    pub fn pending_edits(&self) -> usize {
        self.edits.len()
    }

    /// Current style nesting; zero once every push was popped.
    pub fn style_depth(&self) -> usize {
        self.styles.len()
    }

    /// Current section nesting; zero once every open section was ended.
    pub fn section_depth(&self) -> usize {
        self.sections.len()
    }

    fn path(&self, label: &str) -> String {
        let mut path = self.sections.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(label);
        path
    }
}

impl InspectorUi for ScriptedUi {
    fn labeled_control(
        &mut self,
        label: &str,
        value: &FieldValue,
        _constraints: &Constraints,
    ) -> Option<FieldValue> {
        let path = self.path(label);
        self.drawn.push(path.clone());

        let index = self.edits.iter().position(|(key, _)| {
            key == label || path == *key || path.ends_with(&format!("/{key}"))
        })?;
        let (key, scripted) = self.edits.remove(index);
        let resolved = scripted.resolve(value);
        if resolved.is_none() {
            log::warn!("Scripted edit `{key}` = {scripted:?} does not fit {value:?}.");
        }
        resolved
    }

    fn begin_section(&mut self, title: &str) -> bool {
        if self.collapsed.contains(title) {
            return false;
        }
        self.sections.push(title.to_string());
        true
    }

    fn end_section(&mut self) {
        self.sections.pop();
    }

    fn push_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::EnumValue;

    #[test]
    fn edits_match_by_label_or_path() {
        let mut ui = ScriptedUi::new()
            .with_edit("Collider/Mass", ScriptValue::Float(2.0))
            .with_edit("Name", ScriptValue::Text("Bar".into()));

        assert!(ui.begin_section("Collider"));
        let mass = ui.labeled_control("Mass", &FieldValue::Float(1.0), &Constraints::default());
        let name = ui.labeled_control("Name", &FieldValue::Text("Foo".into()), &Constraints::default());
        ui.end_section();

        assert_eq!(mass, Some(FieldValue::Float(2.0)));
        assert_eq!(name, Some(FieldValue::Text("Bar".into())));
        assert_eq!(ui.drawn(), ["Collider/Mass", "Collider/Name"]);
        assert_eq!(ui.pending_edits(), 0);
    }

    #[test]
    fn edits_are_consumed_once() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(9.0));
        let value = FieldValue::Float(5.0);
        assert!(ui.labeled_control("Speed", &value, &Constraints::default()).is_some());
        assert!(ui.labeled_control("Speed", &value, &Constraints::default()).is_none());
    }

    #[test]
    fn mismatched_edit_is_ignored() {
        let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Text("fast".into()));
        let edit = ui.labeled_control("Speed", &FieldValue::Float(5.0), &Constraints::default());
        assert!(edit.is_none());
    }

    #[test]
    fn variants_resolve_by_name() {
        const NAMES: &[&str] = &["Back", "Front"];
        let current = FieldValue::Enum(EnumValue { index: 0, variants: NAMES });
        let resolved = ScriptValue::Variant("Front".into()).resolve(&current);
        assert_eq!(resolved, Some(FieldValue::Enum(EnumValue { index: 1, variants: NAMES })));
    }

    #[test]
    fn collapsed_sections_stay_closed() {
        let mut ui = ScriptedUi::new();
        ui.collapse("Transform");
        assert!(!ui.begin_section("Transform"));
        assert_eq!(ui.section_depth(), 0);
    }
}
