pub mod collider;
pub mod mesh_renderer;
pub mod transform;

pub use collider::{BodyHandle, Collider};
pub use mesh_renderer::{CullMode, MeshRenderer};
pub use transform::{EntityId, Transform};
