// editor/src/scene/scene.rs
use crate::scene::components::{PointLight, Spawner};
use glam::Vec3;
use inspector_core::components::{Collider, CullMode, EntityId, MeshRenderer, Transform};
use inspector_core::reflect::{SharedObject, share};
use std::fmt::Write;

/// A named entity and the components the inspector edits.
pub struct SceneEntity {
    pub id: EntityId,
    pub name: String,
    pub components: Vec<SharedObject>,
}

/// Flat list of entities, looked up by name.
#[derive(Default)]
pub struct Scene {
    entities: Vec<SceneEntity>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity whose components are built from its fresh id.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce(EntityId) -> Vec<SharedObject>,
    ) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entities.push(SceneEntity {
            id,
            name: name.into(),
            components: build(id),
        });
        id
    }

    pub fn get(&self, name: &str) -> Option<&SceneEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Drops the entity. Commands still pointing at its components go stale.
    pub fn remove(&mut self, name: &str) -> Option<SceneEntity> {
        let index = self.entities.iter().position(|e| e.name == name)?;
        Some(self.entities.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Reads one field of the first component named `component` on `entity`.
    #[cfg(test)]
    pub fn field(&self, entity: &str, component: &str, field: &str) -> Option<inspector_core::reflect::FieldValue> {
        self.get(entity)?
            .components
            .iter()
            .find_map(|c| {
                let c = c.try_borrow().ok()?;
                if c.type_name() == component { c.get_field(field) } else { None }
            })
    }

    /// Human readable listing of every reflected field.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for entity in &self.entities {
            let _ = writeln!(out, "{} ({:?})", entity.name, entity.id);
            for component in &entity.components {
                let Ok(component) = component.try_borrow() else {
                    let _ = writeln!(out, "  <busy>");
                    continue;
                };
                let _ = writeln!(out, "  {}", component.type_name());
                for info in component.fields().iter().filter(|f| !f.hidden) {
                    if let Some(value) = component.get_field(info.name) {
                        let _ = writeln!(out, "    {} = {:?}", info.name, value);
                    }
                }
            }
        }
        out
    }
}

/// Scene the bundled session is recorded against.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new();

    scene.spawn("Player", |owner| {
        vec![
            share(Transform {
                owner,
                ..Transform::default()
            }),
            share(Collider::default()),
            share(MeshRenderer {
                cull_mode: CullMode::Back,
                ..MeshRenderer::default()
            }),
        ]
    });

    scene.spawn("Spawner", |owner| {
        vec![
            share(Transform {
                position: Vec3::new(4.0, 0.0, -2.0),
                owner,
                ..Transform::default()
            }),
            share(Spawner {
                owner,
                ..Spawner::default()
            }),
        ]
    });

    scene.spawn("Lamp", |owner| {
        vec![
            share(Transform {
                position: Vec3::new(0.0, 3.0, 0.0),
                owner,
                ..Transform::default()
            }),
            share(PointLight::default()),
        ]
    });

    scene
}
