// inspector_core/src/inspector/drawer_cache.rs
use crate::inspector::collider_drawer::ColliderDrawer;
use crate::inspector::drawer::Drawer;
use crate::inspector::generic::GenericDrawer;
use crate::inspector::mesh_renderer_drawer::MeshRendererDrawer;
use crate::inspector::primitive::register_primitive_drawers;
use crate::inspector::transform_drawer::TransformDrawer;
use crate::reflect::{FieldValue, Reflect};
use std::any::TypeId;
use std::collections::HashMap;

/// One drawer submitted with `inspector_drawer!`.
pub struct DrawerEntry {
    pub type_name: &'static str,
    /// Builds the drawer.
    pub factory: fn() -> Box<dyn Drawer>,
}

// Tell `inventory` to keep a list of those entries.
inventory::collect!(DrawerEntry);

/// Helper that builds the boxed drawer for `D`.
pub fn make_drawer<D>() -> Box<dyn Drawer>
where
    D: Drawer + Default + 'static,
{
    Box::new(D::default())
}

/// Registers a drawer type so every `DrawerCache::with_builtin` picks it up.
#[macro_export]
macro_rules! inspector_drawer {
    ($drawer:ty) => {
        $crate::inventory::submit! {
            $crate::inspector::drawer_cache::DrawerEntry {
                type_name: stringify!($drawer),
                factory: $crate::inspector::drawer_cache::make_drawer::<$drawer>,
            }
        }
    };
}

/// Key of the fallback entry: any reflectable object.
pub fn fallback_type() -> TypeId {
    TypeId::of::<dyn Reflect>()
}

/// Maps a runtime type to the drawer that edits it.
pub struct DrawerCache {
    drawers: HashMap<TypeId, Box<dyn Drawer>>,
    fallback: Box<dyn Drawer>,
}

impl Default for DrawerCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawerCache {
    /// A cache that only knows the generic fallback.
    pub fn new() -> Self {
        Self {
            drawers: HashMap::new(),
            fallback: Box::new(GenericDrawer),
        }
    }

    /// A cache with the primitive controls, the bespoke component drawers
    /// and every drawer submitted through `inspector_drawer!`.
    pub fn with_builtin() -> Self {
        let mut cache = Self::new();
        register_primitive_drawers(&mut cache);
        cache.add_drawer(Box::new(TransformDrawer));
        cache.add_drawer(Box::new(ColliderDrawer));
        cache.add_drawer(Box::new(MeshRendererDrawer));

        for entry in inventory::iter::<DrawerEntry> {
            log::debug!("Registering drawer {}.", entry.type_name);
            cache.add_drawer((entry.factory)());
        }
        cache
    }

    /// Registers `drawer` for the exact type it targets, replacing any previous one.
    pub fn add_drawer(&mut self, drawer: Box<dyn Drawer>) {
        let ty = drawer.target_type();
        if ty == fallback_type() {
            self.fallback = drawer;
            return;
        }
        if let Some(old) = self.drawers.insert(ty, drawer) {
            log::debug!("Replaced drawer {}.", old.title());
        }
    }

    /// Exact match if one is registered, the generic drawer otherwise.
    pub fn get_drawer(&self, ty: TypeId) -> &dyn Drawer {
        match self.drawers.get(&ty) {
            Some(drawer) => drawer.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    /// Drawer for a field: keyed on the value's runtime type, or on the
    /// declared type when the value is null.
    pub fn resolve(&self, value: &FieldValue, declared: TypeId) -> &dyn Drawer {
        self.get_drawer(value.runtime_type().unwrap_or(declared))
    }

    /// True when an exact drawer exists for `ty`.
    pub fn contains(&self, ty: TypeId) -> bool {
        self.drawers.contains_key(&ty)
    }

    /// Number of exact registrations, the fallback excluded.
    pub fn len(&self) -> usize {
        self.drawers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawers.is_empty()
    }
}
