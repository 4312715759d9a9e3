use std::sync::Arc;

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::{Geometry, Material};

/// Position, Euler-XYZ rotation and scale of a scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Renderable object pairing a geometric shape with a surface material
///
/// Geometry is shared by reference; several meshes may point at the same
/// `Arc<Geometry>` with different materials and transforms.
pub struct Mesh {
    pub geometry: Arc<Geometry>,
    pub material: Material,
    pub transform: Transform,
}

impl Mesh {
    pub fn new(geometry: Arc<Geometry>, material: Material) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::identity(),
        }
    }
}
