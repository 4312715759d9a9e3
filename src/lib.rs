pub mod camera;
pub mod cli;
pub mod core;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod stage;
pub mod traits;

// Re-export the pieces the binary and tests wire together
pub use scenes::PlaygroundScene;
pub use stage::{Stage, StageLoop};
