pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod headless;
pub mod math;
pub mod traits;
pub mod tree;
pub mod types;

pub use camera::{CameraController, FrameInput, TourSettings};
pub use tree::TreeScene;
pub use types::{CameraPose, ContentItem};
