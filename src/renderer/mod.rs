//! Rendering module
//!
//! The scene is expressed as rectangles and text on a [`DrawSurface`];
//! [`QuadBatch`] turns it into triangles for the WebGPU [`RenderState`].

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use shapes::{DrawSurface, QuadBatch, TextAlign, TextLabel, TextStyle};
pub use vertex::Vertex;
