mod geometry;
mod light;
mod material;
mod mesh;

pub use geometry::{Geometry, Vertex};
pub use light::{AmbientLight, PointLight};
pub use material::Material;
pub use mesh::{Mesh, Transform};

/// Handle to a mesh owned by a [`Scene`]
///
/// Handles are plain indices; the scene never removes objects, so a handle
/// stays valid for the scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle(usize);

/// Handle to a point light owned by a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightHandle(usize);

/// Root container owning every renderable object and light
#[derive(Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
    ambient_light: Option<AmbientLight>,
    point_lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mesh, returning a handle for later mutation
    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshHandle {
        self.meshes.push(mesh);
        MeshHandle(self.meshes.len() - 1)
    }

    pub fn mesh(&self, handle: MeshHandle) -> &Mesh {
        &self.meshes[handle.0]
    }

    pub fn mesh_mut(&mut self, handle: MeshHandle) -> &mut Mesh {
        &mut self.meshes[handle.0]
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn set_ambient_light(&mut self, light: AmbientLight) {
        self.ambient_light = Some(light);
    }

    pub fn ambient_light(&self) -> Option<&AmbientLight> {
        self.ambient_light.as_ref()
    }

    pub fn add_point_light(&mut self, light: PointLight) -> LightHandle {
        self.point_lights.push(light);
        LightHandle(self.point_lights.len() - 1)
    }

    pub fn point_light(&self, handle: LightHandle) -> &PointLight {
        &self.point_lights[handle.0]
    }

    pub fn point_light_mut(&mut self, handle: LightHandle) -> &mut PointLight {
        &mut self.point_lights[handle.0]
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::sync::Arc;

    #[test]
    fn add_mesh_returns_sequential_handles() {
        let mut scene = Scene::new();
        let geometry = Arc::new(Geometry::cuboid(1.0, 1.0, 1.0));

        let a = scene.add_mesh(Mesh::new(geometry.clone(), Material::from_hex(0xff0000)));
        let b = scene.add_mesh(Mesh::new(geometry, Material::from_hex(0x00ff00)));

        assert_ne!(a, b);
        assert_eq!(scene.meshes().len(), 2);
        assert_eq!(scene.mesh(a).material.color, Material::from_hex(0xff0000).color);
    }

    #[test]
    fn mesh_mut_writes_through_handle() {
        let mut scene = Scene::new();
        let geometry = Arc::new(Geometry::cuboid(1.0, 1.0, 1.0));
        let handle = scene.add_mesh(Mesh::new(geometry, Material::from_hex(0x0000ff)));

        scene.mesh_mut(handle).transform.position = Vec3::new(1.0, 2.0, 3.0);

        assert_eq!(scene.mesh(handle).transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn lights_are_addressable() {
        let mut scene = Scene::new();
        assert!(scene.ambient_light().is_none());

        scene.set_ambient_light(AmbientLight::new(0xffffff, 0.2));
        let lamp = scene.add_point_light(PointLight::new(0xdddd00, 10.0, 500.0));

        scene.point_light_mut(lamp).position.y = 40.0;

        assert!(scene.ambient_light().is_some());
        assert_eq!(scene.point_light(lamp).position.y, 40.0);
        assert_eq!(scene.point_lights().len(), 1);
    }
}
