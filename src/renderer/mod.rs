//! WebGPU renderer
//!
//! Read-only over the game state: `scene` turns a `GameState` into a
//! vertex list, `pipeline` puts it on screen.

pub mod camera;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use camera::Camera;
pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;
