use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::traits::controller::{Button, Controller};

const ROTATE_SPEED: f32 = 0.005;
const ZOOM_SPEED: f32 = 0.1;
// Keep the camera off the exact poles so look-at stays well defined
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Orbit camera rig: yaw/pitch/distance around a fixed target
///
/// `update` is the one per-frame operation: it folds the accumulated input
/// deltas into the rig state and writes the camera position.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    target: Vec3,
    distance: f32,
    yaw: f32,
    pitch: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitControls {
    /// Derive the rig from the camera's current position and target
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(1.0);

        Self {
            target: camera.target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            min_distance: 1.0,
            max_distance: 5000.0,
        }
    }

    /// Reconcile the camera with user input accumulated since last frame
    pub fn update(&mut self, input: &dyn Controller, camera: &mut PerspectiveCamera) {
        if input.is_down(Button::MouseLeft) {
            let (dx, dy) = input.mouse_delta();
            self.yaw -= dx * ROTATE_SPEED;
            self.pitch = (self.pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.distance = (self.distance * (1.0 - scroll * ZOOM_SPEED))
                .clamp(self.min_distance, self.max_distance);
        }

        let direction = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        camera.position = self.target + direction * self.distance;
        camera.target = self.target;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}
