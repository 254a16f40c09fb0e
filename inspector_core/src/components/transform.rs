// inspector_core/src/components/transform.rs
use crate::reflect_opaque;
use reflect_derive::Reflect;
use glam::Vec3;

/// Identifier of the scene entity that owns a component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);
reflect_opaque!(EntityId);

/// Placement of an entity in the scene.
#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in degrees.
    pub rotation: Vec3,
    pub scale: Vec3,
    /// Edited through the scene hierarchy, never through the inspector.
    pub owner: EntityId,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            owner: EntityId::default(),
        }
    }
}
