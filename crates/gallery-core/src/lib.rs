pub mod camera;
pub mod color;
pub mod constants;
pub mod damping;
pub mod focus;
pub mod frame_spec;
pub mod gallery;
pub mod location;
pub mod picking;
pub mod scene;
pub mod visual;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use focus::*;
pub use frame_spec::*;
pub use gallery::*;
pub use location::*;
pub use scene::*;
pub use visual::*;
