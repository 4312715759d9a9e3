pub mod clock;
pub mod hooks;
pub mod input_adapter;
pub mod orbit_controls;

pub use clock::{Clock, FrameInfo};
pub use hooks::UpdateHooks;
pub use input_adapter::WinitController;
pub use orbit_controls::OrbitControls;
