//! Fullscreen-quad rendering.
//!
//! Convention:
//! - no vertex buffers; the vertex shader maps `vertex_index` 0..6 to the two
//!   triangles covering clip space
//! - `@group(0)` holds the frame (time, angle) and resolution uniforms

mod pass;
mod pipeline;
mod renderer;
mod uniforms;

pub use pass::{PassRecorder, QuadPass};
pub use pipeline::QuadPipeline;
pub use renderer::{FrameState, FrameUpdate, QuadRenderer, TickOutcome};
pub use uniforms::{FrameUniform, ResolutionUniform, UniformSet, ANGULAR_VELOCITY};
