use inspector_core::commands::CommandManager;
use inspector_core::components::{BodyHandle, EntityId};
use inspector_core::inspector::drawer::MAX_DEPTH;
use inspector_core::inspector::{DrawerCache, EditCollapse, Inspector};
use inspector_core::Reflect;
use inspector_core::reflect::{
    AssetId, FieldInfo, FieldValue, Reflect, ReflectError, SharedObject, share,
};
use inspector_core::ui::{ScriptValue, ScriptedUi};
use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Reflect)]
struct Spawner {
    pub speed: f32,
    pub name: String,
    pub owner: EntityId,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            speed: 5.0,
            name: "Foo".to_string(),
            owner: EntityId(7),
        }
    }
}

#[derive(Default, Reflect)]
struct Marker;

#[derive(Default, Reflect)]
struct Settings {
    #[reflect(readonly)]
    pub version: i32,
    #[reflect(skip)]
    pub dirty: bool,
    pub body: BodyHandle,
    pub icon: Option<AssetId>,
    #[reflect(min = 0, max = 10)]
    pub level: i32,
}

#[derive(Default, Reflect)]
struct Wave {
    pub count: i32,
}

#[derive(Reflect)]
struct Director {
    pub label: String,
    pub wave: Rc<RefCell<Wave>>,
}

/// Lists a field it cannot read back.
struct Flaky {
    speed: f32,
    name: String,
}

impl Reflect for Flaky {
    fn type_name(&self) -> &'static str {
        "Flaky"
    }

    fn fields(&self) -> Vec<FieldInfo> {
        vec![
            FieldInfo::of::<f32>("speed"),
            FieldInfo::of::<f32>("broken"),
            FieldInfo::of::<String>("name"),
        ]
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "speed" => Some(FieldValue::Float(self.speed)),
            "name" => Some(FieldValue::Text(self.name.clone())),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ReflectError> {
        match (name, value) {
            ("speed", FieldValue::Float(v)) => self.speed = v,
            ("name", FieldValue::Text(v)) => self.name = v,
            (field, _) => {
                return Err(ReflectError::UnknownField {
                    type_name: "Flaky",
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Reports itself as its own `next` field.
struct Ring {
    me: Weak<RefCell<Ring>>,
    id: i32,
}

impl Reflect for Ring {
    fn type_name(&self) -> &'static str {
        "Ring"
    }

    fn fields(&self) -> Vec<FieldInfo> {
        vec![
            FieldInfo::of::<i32>("id"),
            FieldInfo::of::<Ring>("next").with_read_only(true),
        ]
    }

    fn get_field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(FieldValue::Int(self.id)),
            "next" => {
                let next: SharedObject = self.me.upgrade()?;
                Some(FieldValue::Object(next))
            }
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ReflectError> {
        match (name, value) {
            ("id", FieldValue::Int(v)) => {
                self.id = v;
                Ok(())
            }
            _ => Err(ReflectError::ReadOnly(name.to_string())),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn generic_only() -> Inspector {
    // Primitive controls only, so every object goes through the generic drawer
    let mut drawers = DrawerCache::new();
    inspector_core::inspector::primitive::register_primitive_drawers(&mut drawers);
    Inspector::new(drawers, EditCollapse::LastWins)
}

#[test]
fn offers_speed_and_name_but_never_owner() {
    let spawner = share(Spawner::default());
    let mut ui = ScriptedUi::new();

    assert!(generic_only().draw_object(&spawner, &mut ui).is_none());
    assert_eq!(ui.drawn(), ["Spawner/Speed", "Spawner/Name"]);
    assert_eq!(ui.section_depth(), 0);
    assert_eq!(ui.style_depth(), 0);
}

#[test]
fn object_without_fields_is_empty_but_valid() {
    let marker = share(Marker);
    let mut ui = ScriptedUi::new();

    assert!(generic_only().draw_object(&marker, &mut ui).is_none());
    assert!(ui.drawn().is_empty());
}

#[test]
fn edit_becomes_reflective_command() {
    let typed = Rc::new(RefCell::new(Spawner::default()));
    let shared: SharedObject = typed.clone();
    let mut history = CommandManager::new();

    let mut ui = ScriptedUi::new().with_edit("Name", ScriptValue::Text("Bar".into()));
    let cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    assert_eq!(format!("{cmd:?}"), "Set Spawner.name \"Foo\" -> \"Bar\"");

    history.commit(cmd);
    assert_eq!(typed.borrow().name, "Bar");
    history.undo();
    assert_eq!(typed.borrow().name, "Foo");
}

#[test]
fn read_only_edits_are_discarded() {
    let settings = share(Settings::default());
    let mut ui = ScriptedUi::new().with_edit("Version", ScriptValue::Int(3));

    assert!(generic_only().draw_object(&settings, &mut ui).is_none());
    assert!(ui.drawn().iter().any(|p| p == "Settings/Version"));
    assert_eq!(settings.borrow().get_field("version"), Some(FieldValue::Int(0)));
}

#[test]
fn hidden_and_opaque_members_are_skipped() {
    let settings = share(Settings::default());
    let mut ui = ScriptedUi::new();

    generic_only().draw_object(&settings, &mut ui);
    assert_eq!(ui.drawn_labels(), vec!["Version", "Icon", "Level"]);
}

#[test]
fn unset_asset_gets_a_picker_from_its_declared_type() {
    let typed = Rc::new(RefCell::new(Settings::default()));
    let shared: SharedObject = typed.clone();
    let id = AssetId::new();

    let mut ui = ScriptedUi::new().with_edit("Icon", ScriptValue::Asset(Some(id)));
    let mut cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    cmd.execute();
    assert_eq!(typed.borrow().icon, Some(id));
}

#[test]
fn numeric_range_is_enforced() {
    let typed = Rc::new(RefCell::new(Settings::default()));
    let shared: SharedObject = typed.clone();

    let mut ui = ScriptedUi::new().with_edit("Level", ScriptValue::Int(99));
    let mut cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    cmd.execute();
    assert_eq!(typed.borrow().level, 10);
}

#[test]
fn nested_objects_are_drawn_recursively() {
    let wave = Rc::new(RefCell::new(Wave::default()));
    let director = share(Director { label: "Boss".into(), wave: wave.clone() });

    let mut ui = ScriptedUi::new().with_edit("Wave/Count", ScriptValue::Int(4));
    let mut cmd = generic_only().draw_object(&director, &mut ui).unwrap();
    assert_eq!(ui.drawn(), ["Director/Label", "Director/Wave/Count"]);

    cmd.execute();
    assert_eq!(wave.borrow().count, 4);
    cmd.undo();
    assert_eq!(wave.borrow().count, 0);
}

#[test]
fn two_edits_in_one_frame_keep_the_last() {
    let typed = Rc::new(RefCell::new(Spawner::default()));
    let shared: SharedObject = typed.clone();

    let mut ui = ScriptedUi::new()
        .with_edit("Speed", ScriptValue::Float(9.0))
        .with_edit("Name", ScriptValue::Text("Bar".into()));
    let mut cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    cmd.execute();

    assert_eq!(typed.borrow().name, "Bar");
    assert_eq!(typed.borrow().speed, 5.0);
}

#[test]
fn batch_policy_records_every_edit() {
    let typed = Rc::new(RefCell::new(Spawner::default()));
    let shared: SharedObject = typed.clone();
    let mut inspector = generic_only();
    inspector.set_collapse(EditCollapse::Batch);
    let mut history = CommandManager::new();

    let mut ui = ScriptedUi::new()
        .with_edit("Speed", ScriptValue::Float(9.0))
        .with_edit("Name", ScriptValue::Text("Bar".into()));
    history.commit(inspector.draw_object(&shared, &mut ui).unwrap());
    assert_eq!(typed.borrow().speed, 9.0);
    assert_eq!(typed.borrow().name, "Bar");

    history.undo();
    assert_eq!(typed.borrow().speed, 5.0);
    assert_eq!(typed.borrow().name, "Foo");
}

#[test]
fn collapsed_section_draws_nothing() {
    let spawner = share(Spawner::default());
    let mut ui = ScriptedUi::new().with_edit("Speed", ScriptValue::Float(1.0));
    ui.collapse("Spawner");

    assert!(generic_only().draw_object(&spawner, &mut ui).is_none());
    assert!(ui.drawn().is_empty());
    assert_eq!(ui.pending_edits(), 1);
}

#[test]
fn unreadable_field_does_not_hide_its_siblings() {
    let flaky = Rc::new(RefCell::new(Flaky { speed: 1.0, name: "Foo".into() }));
    let shared: SharedObject = flaky.clone();

    let mut ui = ScriptedUi::new().with_edit("Name", ScriptValue::Text("Bar".into()));
    let mut cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    assert_eq!(ui.drawn(), ["Flaky/Speed", "Flaky/Name"]);

    cmd.execute();
    assert_eq!(flaky.borrow().name, "Bar");
}

#[test]
fn self_referencing_object_stops_at_max_depth() {
    let ring = Rc::new_cyclic(|me| RefCell::new(Ring { me: me.clone(), id: 1 }));
    let shared: SharedObject = ring.clone();
    let mut ui = ScriptedUi::new();

    assert!(generic_only().draw_object(&shared, &mut ui).is_none());
    assert_eq!(ui.drawn().len(), MAX_DEPTH);
    assert!(ui.drawn_labels().iter().all(|label| *label == "Id"));
    assert_eq!(ui.section_depth(), 0);
    assert_eq!(ui.style_depth(), 0);
}

#[test]
fn edit_deep_inside_a_cycle_still_reaches_the_object() {
    let ring = Rc::new_cyclic(|me| RefCell::new(Ring { me: me.clone(), id: 1 }));
    let shared: SharedObject = ring.clone();

    let mut ui = ScriptedUi::new().with_edit("Next/Next/Id", ScriptValue::Int(3));
    let mut cmd = generic_only().draw_object(&shared, &mut ui).unwrap();
    cmd.execute();
    assert_eq!(ring.borrow().id, 3);
}
