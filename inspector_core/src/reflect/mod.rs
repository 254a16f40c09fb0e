pub mod field_value;
pub mod reflect;
pub mod settable;

pub use field_value::{AssetId, EnumValue, FieldValue};
pub use reflect::{FieldInfo, Reflect, ReflectError, ReflectField, SharedObject, share};
pub use settable::Settable;
