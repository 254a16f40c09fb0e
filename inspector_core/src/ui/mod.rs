pub mod scripted_ui;
pub mod widgets;

pub use scripted_ui::{ScriptValue, ScriptedUi};
pub use widgets::{Constraints, InspectorUi, Style};
