//! WebGPU rendering module
//!
//! `scene` builds the frame's triangles on the CPU (pure, testable);
//! `pipeline` owns the GPU objects and draws them.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{build_scene, shake_offset};
pub use vertex::Vertex;
