pub mod controller;
pub mod scene;

pub use controller::{Button, Controller};
pub use scene::SceneProvider;
