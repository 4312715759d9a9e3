use crate::core::hooks::UpdateHooks;
use crate::stage::Stage;

/// Scene construction abstraction
///
/// A provider performs the one-time population of the stage: adding meshes
/// and lights, and registering the per-frame hooks that animate them. It is
/// invoked exactly once, on the first frame.
pub trait SceneProvider {
    /// Build the scene contents and register its per-frame hooks
    fn build(&self, stage: &mut Stage, hooks: &mut UpdateHooks<Stage>);

    /// Get scene name for debugging
    fn name(&self) -> &str {
        "Scene"
    }
}
