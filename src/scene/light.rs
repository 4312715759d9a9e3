use glam::Vec3;

use super::Material;

/// Directionless fill light applied to every surface
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(hex: u32, intensity: f32) -> Self {
        Self {
            color: Material::from_hex(hex).color,
            intensity,
        }
    }
}

/// Omnidirectional light with a finite range
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance beyond which the light contributes nothing
    pub range: f32,
    pub position: Vec3,
}

impl PointLight {
    pub fn new(hex: u32, intensity: f32, range: f32) -> Self {
        Self {
            color: Material::from_hex(hex).color,
            intensity,
            range,
            position: Vec3::ZERO,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }
}
