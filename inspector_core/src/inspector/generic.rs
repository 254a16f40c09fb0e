// inspector_core/src/inspector/generic.rs
use crate::commands::ReflectSetCmd;
use crate::inspector::drawer::{DrawContext, Drawer, Edit};
use crate::inspector::drawer_cache::fallback_type;
use crate::inspector::edits::EditCollector;
use crate::reflect::{FieldInfo, FieldValue, Settable};
use crate::ui::{Constraints, Style};
use std::any::TypeId;
use std::borrow::Cow;

/// Structural members that have their own editing paths.
pub const DENIED_FIELDS: &[&str] = &["owner", "parent", "transform"];

/// Draws *any* reflectable object, one control per editable field.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericDrawer;

impl GenericDrawer {
    /// True for fields the generic drawer shows.
    pub fn is_listed(field: &FieldInfo) -> bool {
        !field.hidden && !DENIED_FIELDS.contains(&field.name)
    }
}

impl Drawer for GenericDrawer {
    fn target_type(&self) -> TypeId {
        fallback_type()
    }

    fn draw(
        &self,
        label: &str,
        value: &FieldValue,
        _constraints: &Constraints,
        ctx: &mut DrawContext,
    ) -> Edit {
        // Only objects can be enumerated
        let FieldValue::Object(object) = value else {
            log::debug!("No drawer for `{label}` ({value:?}), skipped.");
            return Edit::Unchanged;
        };

        let fields = match object.try_borrow() {
            Ok(object) => object.fields(),
            Err(_) => {
                log::debug!("`{label}` is busy, skipped.");
                return Edit::Unchanged;
            }
        };

        if !ctx.ui.begin_section(label) {
            return Edit::Unchanged;
        }

        let mut edits = EditCollector::new(ctx.collapse);

        for field in fields.iter().filter(|f| Self::is_listed(f)) {
            // Read the current value, a field that cannot be read is skipped
            let current = match object.try_borrow().ok().and_then(|o| o.get_field(field.name)) {
                Some(current) => current,
                None => {
                    log::debug!("Could not read `{}`, skipped.", field.name);
                    continue;
                }
            };

            let field_label = parse_field_name(field.name);
            let constraints = Constraints::from(field);

            if constraints.read_only {
                ctx.ui.push_style(Style::Disabled);
            }
            let edit = ctx.draw_field(&field_label, &current, field.declared, &constraints);
            if constraints.read_only {
                ctx.ui.pop_style();
            }

            match edit {
                Edit::Unchanged => {}
                Edit::Value(_) if !field.writable => {
                    log::debug!("`{}` is read-only, edit discarded.", field.name);
                }
                Edit::Value(new) => {
                    let settable = Settable::new(object, field.name);
                    if let Some(cmd) = ReflectSetCmd::new(settable, current, new) {
                        edits.push(Box::new(cmd));
                    }
                }
                // Nested objects carry their own target
                Edit::Command(cmd) => edits.push(cmd),
            }
        }

        ctx.ui.end_section();
        edits.finish()
    }
}

/// Turns a snake_case field name into a label, `is_trigger` -> `Is Trigger`.
pub fn parse_field_name(name: &str) -> Cow<'_, str> {
    // Fast path
    if !name.contains('_')
        && name
            .chars()
            .next()
            .map(|c| c.is_ascii_uppercase())
            .unwrap_or(false)
    {
        return Cow::Borrowed(name);
    }

    let words: Vec<String> = name
        .split('_')
        .filter(|s| !s.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        return Cow::Borrowed(name);
    }
    Cow::Owned(words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(parse_field_name("is_trigger"), "Is Trigger");
        assert_eq!(parse_field_name("speed"), "Speed");
        assert_eq!(parse_field_name("Name"), "Name");
        assert_eq!(parse_field_name("__"), "__");
    }

    #[test]
    fn denied_and_hidden_fields_are_not_listed() {
        let owner = FieldInfo::of::<u32>("owner");
        let hidden = FieldInfo::of::<f32>("cache").with_hidden(true);
        let speed = FieldInfo::of::<f32>("speed");
        assert!(!GenericDrawer::is_listed(&owner));
        assert!(!GenericDrawer::is_listed(&hidden));
        assert!(GenericDrawer::is_listed(&speed));
    }
}
