// inspector_core/src/reflect/reflect.rs
use crate::reflect::field_value::{AssetId, FieldValue};
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;
use glam::Vec3;
use thiserror::Error;

/// An inspectable object shared between the scene, the inspector and the
/// commands that edit it.
pub type SharedObject = Rc<RefCell<dyn Reflect>>;

/// Wraps a value so it can be handed to the inspector.
pub fn share<T: Reflect>(value: T) -> SharedObject {
    Rc::new(RefCell::new(value))
}

/// Why a reflective read or write did not happen.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReflectError {
    #[error("`{type_name}` has no field named `{field}`")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },
    #[error("field `{0}` is read-only")]
    ReadOnly(String),
    #[error("field `{field}` expects {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("target object no longer exists")]
    TargetDropped,
    #[error("target object is already borrowed")]
    Borrowed,
}

/// Metadata that the inspector consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldInfo {
    pub name: &'static str,
    /// Type the field was declared with. Used to pick a drawer when the value is null.
    pub declared: TypeId,
    pub declared_name: &'static str,
    pub writable: bool,
    /// Tagged as not user editable.
    pub hidden: bool,
    pub widget_hint: Option<&'static str>,
    pub range: Option<(f32, f32)>,
}

impl FieldInfo {
    pub fn new(name: &'static str, declared: TypeId, declared_name: &'static str) -> Self {
        Self {
            name,
            declared,
            declared_name,
            writable: true,
            hidden: false,
            widget_hint: None,
            range: None,
        }
    }

    /// Field declared as `T`.
    pub fn of<T: 'static>(name: &'static str) -> Self {
        Self::new(name, TypeId::of::<T>(), std::any::type_name::<T>())
    }

    pub fn with_hint(mut self, hint: Option<&'static str>) -> Self {
        self.widget_hint = hint;
        self
    }

    pub fn with_range(mut self, range: Option<(f32, f32)>) -> Self {
        self.range = range;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = self.hidden || hidden;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.writable = self.writable && !read_only;
        self
    }
}

/// Trait that every inspectable object needs to expose.
/// Usually implemented with `#[derive(Reflect)]`.
pub trait Reflect: Any {
    fn type_name(&self) -> &'static str;

    /// Returns descriptors for all public fields, hidden ones included.
    fn fields(&self) -> Vec<FieldInfo>;

    fn get_field(&self, name: &str) -> Option<FieldValue>;

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ReflectError>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Helper trait that maps a concrete field type onto a `FieldValue`.
pub trait ReflectField: Sized {
    fn field_info(name: &'static str) -> FieldInfo;
    fn to_value(&self) -> FieldValue;
    fn from_value(value: FieldValue) -> Option<Self>;
}

impl ReflectField for String {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<String>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl ReflectField for f32 {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<f32>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl ReflectField for i32 {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<i32>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl ReflectField for bool {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<bool>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }
}

impl ReflectField for Vec3 {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<Vec3>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Vec3(*self)
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Vec3(v) => Some(v),
            _ => None,
        }
    }
}

impl ReflectField for Option<AssetId> {
    // Declared as the id itself so an unset reference still gets an asset picker
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<AssetId>(name)
    }
    fn to_value(&self) -> FieldValue {
        FieldValue::Asset(*self)
    }
    fn from_value(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Asset(id) => Some(id),
            _ => None,
        }
    }
}

/// Nested objects are edited in place, the reference itself is never reassigned.
impl<T: Reflect> ReflectField for Rc<RefCell<T>> {
    fn field_info(name: &'static str) -> FieldInfo {
        FieldInfo::of::<T>(name).with_read_only(true)
    }
    fn to_value(&self) -> FieldValue {
        let shared: SharedObject = self.clone();
        FieldValue::Object(shared)
    }
    fn from_value(_value: FieldValue) -> Option<Self> {
        None
    }
}

/// Implements `ReflectField` for a fieldless enum deriving strum's
/// `EnumIter` and `VariantNames`.
#[macro_export]
macro_rules! reflect_enum {
    ($ty:ty) => {
        impl $crate::reflect::ReflectField for $ty {
            fn field_info(name: &'static str) -> $crate::reflect::FieldInfo {
                $crate::reflect::FieldInfo::new(
                    name,
                    ::std::any::TypeId::of::<$crate::reflect::EnumValue>(),
                    ::std::any::type_name::<$ty>(),
                )
            }

            fn to_value(&self) -> $crate::reflect::FieldValue {
                let index = <$ty as $crate::strum::IntoEnumIterator>::iter()
                    .position(|v| v == *self)
                    .unwrap_or(0);
                $crate::reflect::FieldValue::Enum($crate::reflect::EnumValue {
                    index,
                    variants: <$ty as $crate::strum::VariantNames>::VARIANTS,
                })
            }

            fn from_value(value: $crate::reflect::FieldValue) -> Option<Self> {
                match value {
                    $crate::reflect::FieldValue::Enum(e) => {
                        <$ty as $crate::strum::IntoEnumIterator>::iter().nth(e.index)
                    }
                    _ => None,
                }
            }
        }
    };
}

/// Implements `ReflectField` for a handle type the inspector cannot show.
#[macro_export]
macro_rules! reflect_opaque {
    ($ty:ty) => {
        impl $crate::reflect::ReflectField for $ty {
            fn field_info(name: &'static str) -> $crate::reflect::FieldInfo {
                $crate::reflect::FieldInfo::of::<$ty>(name).with_read_only(true)
            }

            fn to_value(&self) -> $crate::reflect::FieldValue {
                $crate::reflect::FieldValue::Opaque(::std::any::type_name::<$ty>())
            }

            fn from_value(_value: $crate::reflect::FieldValue) -> Option<Self> {
                None
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reflect;

    #[derive(Default, Reflect)]
    struct Probe {
        pub speed: f32,
        #[reflect(readonly)]
        pub id: i32,
        #[reflect(skip)]
        pub cache: bool,
        #[reflect(min = 0.0, max = 1.0)]
        #[widget("slider")]
        pub volume: f32,
        #[allow(dead_code)]
        secret: String,
    }

    #[test]
    fn derive_lists_public_fields_only() {
        let probe = Probe::default();
        let names: Vec<_> = probe.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["speed", "id", "cache", "volume"]);
        assert!(probe.get_field("secret").is_none());
    }

    #[test]
    fn derive_forwards_attributes() {
        let fields = Probe::default().fields();
        assert!(!fields[1].writable);
        assert!(fields[2].hidden);
        assert_eq!(fields[3].range, Some((0.0, 1.0)));
        assert_eq!(fields[3].widget_hint, Some("slider"));
        assert_eq!(fields[0].declared, TypeId::of::<f32>());
    }

    #[test]
    fn set_field_checks_access_and_type() {
        let mut probe = Probe::default();
        assert_eq!(probe.set_field("speed", FieldValue::Float(3.0)), Ok(()));
        assert_eq!(probe.speed, 3.0);
        assert_eq!(
            probe.set_field("id", FieldValue::Int(9)),
            Err(ReflectError::ReadOnly("id".into()))
        );
        assert!(matches!(
            probe.set_field("speed", FieldValue::Bool(true)),
            Err(ReflectError::TypeMismatch { found: "bool", .. })
        ));
        assert!(matches!(
            probe.set_field("missing", FieldValue::Int(1)),
            Err(ReflectError::UnknownField { type_name: "Probe", .. })
        ));
    }
}
