pub mod camera;
pub mod cli;
pub mod core;
pub mod loaders;
pub mod mesh;
pub mod object;
pub mod player;
pub mod renderer;
pub mod types;

pub use camera::{Camera, CameraMovement};
pub use mesh::{cube_mesh, Mesh};
pub use object::SceneObject;
pub use player::{Player, PlayerConfig};
pub use renderer::Renderer;
