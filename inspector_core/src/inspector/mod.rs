pub mod collider_drawer;
pub mod drawer;
pub mod drawer_cache;
pub mod edits;
pub mod generic;
pub mod inspector;
pub mod mesh_renderer_drawer;
pub mod primitive;
pub mod transform_drawer;

pub use drawer::{DrawContext, Drawer, Edit};
pub use drawer_cache::{DrawerCache, DrawerEntry};
pub use edits::{EditCollapse, EditCollector};
pub use generic::GenericDrawer;
pub use inspector::Inspector;
