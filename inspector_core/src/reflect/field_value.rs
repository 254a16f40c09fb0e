// inspector_core/src/reflect/field_value.rs
use crate::reflect::reflect::SharedObject;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;
use std::rc::Rc;
use glam::Vec3;
use uuid::Uuid;

/// Opaque handle that the asset database gives out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AssetId(pub Uuid);

impl AssetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selected variant of a reflected enum together with every variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub index: usize,
    pub variants: &'static [&'static str],
}

impl EnumValue {
    /// Name of the selected variant.
    pub fn name(&self) -> &'static str {
        self.variants.get(self.index).copied().unwrap_or("?")
    }

    /// Same enum, different variant. `None` when the name is unknown.
    pub fn with_variant(&self, name: &str) -> Option<Self> {
        self.variants
            .iter()
            .position(|v| *v == name)
            .map(|index| Self { index, variants: self.variants })
    }
}

/// One field value, copied out of the object that owns it.
#[derive(Clone)]
pub enum FieldValue {
    Float(f32),
    Int(i32),
    Bool(bool),
    Text(String),
    Vec3(Vec3),
    Enum(EnumValue),
    /// `None` is an unset reference.
    Asset(Option<AssetId>),
    /// A nested object that is inspected in place.
    Object(SharedObject),
    /// A value that cannot be shown, e.g. a native handle. Holds the type name.
    Opaque(&'static str),
}

impl FieldValue {
    /// Short human readable name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Float(_) => "float",
            FieldValue::Int(_) => "int",
            FieldValue::Bool(_) => "bool",
            FieldValue::Text(_) => "text",
            FieldValue::Vec3(_) => "vec3",
            FieldValue::Enum(_) => "enum",
            FieldValue::Asset(_) => "asset",
            FieldValue::Object(_) => "object",
            FieldValue::Opaque(_) => "opaque",
        }
    }

    /// The concrete type carried by the value, or `None` for null values
    /// and values that do not expose one.
    pub fn runtime_type(&self) -> Option<TypeId> {
        match self {
            FieldValue::Float(_) => Some(TypeId::of::<f32>()),
            FieldValue::Int(_) => Some(TypeId::of::<i32>()),
            FieldValue::Bool(_) => Some(TypeId::of::<bool>()),
            FieldValue::Text(_) => Some(TypeId::of::<String>()),
            FieldValue::Vec3(_) => Some(TypeId::of::<Vec3>()),
            FieldValue::Enum(_) => Some(TypeId::of::<EnumValue>()),
            FieldValue::Asset(Some(_)) => Some(TypeId::of::<AssetId>()),
            FieldValue::Asset(None) => None,
            FieldValue::Object(object) => object
                .try_borrow()
                .ok()
                .map(|o| o.as_any().type_id()),
            FieldValue::Opaque(_) => None,
        }
    }

    /// True when both values are the same variant.
    pub fn same_kind(&self, other: &FieldValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Clamps numeric values into `range`, vectors per component.
    /// Other values are returned as is.
    pub fn clamped(self, range: Option<(f32, f32)>) -> FieldValue {
        match (self, range) {
            (FieldValue::Float(f), Some((min, max))) => FieldValue::Float(f.clamp(min, max)),
            (FieldValue::Vec3(v), Some((min, max))) => {
                FieldValue::Vec3(v.clamp(Vec3::splat(min), Vec3::splat(max)))
            }
            (FieldValue::Int(i), Some((min, max))) => {
                FieldValue::Int((i as f32).clamp(min, max).round() as i32)
            }
            (value, _) => value,
        }
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Vec3(a), FieldValue::Vec3(b)) => a == b,
            (FieldValue::Enum(a), FieldValue::Enum(b)) => a == b,
            (FieldValue::Asset(a), FieldValue::Asset(b)) => a == b,
            (FieldValue::Object(a), FieldValue::Object(b)) => Rc::ptr_eq(a, b),
            (FieldValue::Opaque(a), FieldValue::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Float(v) => write!(f, "{v}"),
            FieldValue::Int(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v:?}"),
            FieldValue::Vec3(v) => write!(f, "({}, {}, {})", v.x, v.y, v.z),
            FieldValue::Enum(v) => write!(f, "{}", v.name()),
            FieldValue::Asset(Some(id)) => write!(f, "asset {id}"),
            FieldValue::Asset(None) => write!(f, "<none>"),
            FieldValue::Object(o) => match o.try_borrow() {
                Ok(o) => write!(f, "<{}>", o.type_name()),
                Err(_) => write!(f, "<object>"),
            },
            FieldValue::Opaque(name) => write!(f, "<{name}>"),
        }
    }
}
