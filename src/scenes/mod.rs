mod playground;

pub use playground::PlaygroundScene;
