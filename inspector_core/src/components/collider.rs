// inspector_core/src/components/collider.rs
use crate::reflect_opaque;
use reflect_derive::Reflect;
use glam::Vec3;

/// Handle of the body inside the physics engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);
reflect_opaque!(BodyHandle);

#[derive(Clone, Debug, PartialEq, Reflect)]
pub struct Collider {
    #[reflect(min = 0.0)]
    pub mass: f32,
    pub is_trigger: bool,
    pub size: Vec3,
    pub body: BodyHandle,
}

impl Default for Collider {
    fn default() -> Self {
        Self {
            mass: 1.0,
            is_trigger: false,
            size: Vec3::ONE,
            body: BodyHandle::default(),
        }
    }
}
