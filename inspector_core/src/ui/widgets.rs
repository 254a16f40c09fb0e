// inspector_core/src/ui/widgets.rs
use crate::reflect::{FieldInfo, FieldValue};

/// Limits and hints forwarded to a labeled control.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    pub range: Option<(f32, f32)>,
    pub widget_hint: Option<&'static str>,
    /// Draw the control disabled.
    pub read_only: bool,
}

impl Constraints {
    pub fn range(min: f32, max: f32) -> Self {
        Self {
            range: Some((min, max)),
            ..Self::default()
        }
    }
}

impl From<&FieldInfo> for Constraints {
    fn from(field: &FieldInfo) -> Self {
        Self {
            range: field.range,
            widget_hint: field.widget_hint,
            read_only: !field.writable,
        }
    }
}

/// Styles the inspector can push around its controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Highlight for the selected object.
    Selected,
    /// Greyed out, used for read-only values.
    Disabled,
}

/// Immediate mode widget capability the inspector draws through.
///
/// Implementations only report a value once the interaction has resolved,
/// e.g. when a drag is released or enter is pressed, never for every
/// intermediate sample. Each edit therefore becomes exactly one history entry.
pub trait InspectorUi {
    /// Draws a control for `value` and returns the new value when the user changed it.
    fn labeled_control(
        &mut self,
        label: &str,
        value: &FieldValue,
        constraints: &Constraints,
    ) -> Option<FieldValue>;

    /// Draws a collapsible header. Returns true when the section is open,
    /// in which case `end_section` must be called once its body is drawn.
    fn begin_section(&mut self, title: &str) -> bool;

    fn end_section(&mut self);

    fn push_style(&mut self, style: Style);

    fn pop_style(&mut self);
}
