// inspector_core/src/components/mesh_renderer.rs
use crate::reflect::AssetId;
use crate::reflect_enum;
use reflect_derive::Reflect;
use strum_macros::{Display, EnumIter, VariantNames};

/// Which triangle faces are skipped when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter, VariantNames)]
pub enum CullMode {
    #[default]
    Back,
    Front,
    None,
}
reflect_enum!(CullMode);

#[derive(Clone, Debug, Default, PartialEq, Reflect)]
pub struct MeshRenderer {
    pub wireframe: bool,
    pub cull_mode: CullMode,
    /// Unset until a texture is picked.
    pub texture: Option<AssetId>,
}
