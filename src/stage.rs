use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::core::hooks::UpdateHooks;
use crate::core::input_adapter::WinitController;
use crate::core::orbit_controls::OrbitControls;
use crate::scene::Scene;
use crate::traits::scene::SceneProvider;

const CAMERA_FOV_DEGREES: f32 = 50.0;
const CAMERA_NEAR: f32 = 1.0;
const CAMERA_FAR: f32 = 10000.0;
const CAMERA_START: Vec3 = Vec3::new(0.0, 400.0, 1000.0);

/// Everything a frame mutates, owned in one place
///
/// Hooks receive `&mut Stage` instead of capturing references into the
/// scene; objects are addressed through handles.
pub struct Stage {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub input: WinitController,
}

impl Stage {
    pub fn new(aspect: f32) -> Self {
        let mut camera = PerspectiveCamera::new(CAMERA_FOV_DEGREES, aspect, CAMERA_NEAR, CAMERA_FAR);
        camera.position = CAMERA_START;
        camera.target = Vec3::ZERO;

        Self {
            scene: Scene::new(),
            camera,
            controls: OrbitControls::from_camera(&camera),
            input: WinitController::new(),
        }
    }
}

/// Per-frame driver separating one-time construction from updates
///
/// The first `advance` call runs the provider's `build`, which populates the
/// stage and registers every hook. Every call, including the first, then
/// runs the hooks in registration order. Construction is never re-entered.
pub struct StageLoop<S: SceneProvider> {
    stage: Stage,
    hooks: UpdateHooks<Stage>,
    provider: S,
    initialized: bool,
}

impl<S: SceneProvider> StageLoop<S> {
    pub fn new(provider: S, stage: Stage) -> Self {
        Self {
            stage,
            hooks: UpdateHooks::new(),
            provider,
            initialized: false,
        }
    }

    /// Advance one frame with the given absolute time in seconds
    pub fn advance(&mut self, time: f32) {
        if !self.initialized {
            log::info!("building scene '{}'", self.provider.name());
            self.provider.build(&mut self.stage, &mut self.hooks);
            self.initialized = true;
        }

        self.hooks.run_all(&mut self.stage, time);
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}
