pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod geometry;
pub mod lines;
pub mod palette;
pub mod rotation;
pub mod scene;
pub mod theme;
pub mod tilt;

#[cfg(feature = "gpu")]
pub mod render;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use field::*;
pub use lines::*;
pub use palette::*;
pub use rotation::*;
pub use scene::*;
pub use theme::*;
pub use tilt::*;

#[cfg(feature = "gpu")]
pub use render::{GpuDevice, GpuError, SceneRenderer};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
