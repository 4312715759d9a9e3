use glam::{Mat4, Vec3};

/// Perspective projection camera
#[derive(Debug, Clone, Copy)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            fov_y,
            aspect,
            near,
            far,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_proj_maps_target_to_screen_center() {
        let mut camera = PerspectiveCamera::new(50.0, 16.0 / 9.0, 1.0, 10000.0);
        camera.position = Vec3::new(0.0, 400.0, 1000.0);
        camera.target = Vec3::ZERO;

        let clip = camera.view_proj().project_point3(Vec3::ZERO);

        assert!(clip.x.abs() < 1e-4);
        assert!(clip.y.abs() < 1e-4);
        assert!(clip.z > 0.0 && clip.z < 1.0);
    }

    #[test]
    fn points_behind_the_near_plane_clip() {
        let mut camera = PerspectiveCamera::new(50.0, 16.0 / 9.0, 1.0, 10000.0);
        camera.position = Vec3::new(0.0, 0.0, 10.0);
        camera.target = Vec3::ZERO;

        // Point behind the camera
        let clip = camera.view_proj().project_point3(Vec3::new(0.0, 0.0, 20.0));

        assert!(clip.z < 0.0 || clip.z > 1.0);
    }
}
