//! WebGPU rendering module
//!
//! Shapes are batched as colored triangles in logical pixel space and
//! submitted once per frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{LINE_WIDTH, ShapeBatch};
pub use vertex::Vertex;
