//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and issue commands
//! via wgpu. Vertex data arrives as the flat interleaved float streams the
//! geometry crate produces and is uploaded verbatim.

mod ctx;
mod flat;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use flat::FlatRenderer;
pub use mesh::{CameraMatrices, Mesh, MeshRenderer};
