//! WGSL shader sources and host-side validation.
//!
//! Shaders are validated with naga before any GPU object is created, so a
//! broken shader is reported as a `ShaderError` instead of a device-level
//! validation panic.

mod error;
mod source;
mod validate;

pub use error::ShaderError;
pub use source::ShaderSource;
pub use validate::{validate, ShaderInterface, FRAGMENT_ENTRY, FRAME_BINDING, RESOLUTION_BINDING, VERTEX_ENTRY};

#[cfg(test)]
pub(crate) mod fixtures {
    /// Smallest shader satisfying the quad interface.
    pub(crate) const QUAD_WGSL: &str = r#"
struct FrameParams {
    time: f32,
    angle: f32,
};

struct Resolution {
    size: vec2<f32>,
};

@group(0) @binding(0) var<uniform> u_frame: FrameParams;
@group(0) @binding(1) var<uniform> u_resolution: Resolution;

@vertex
fn vs_main(@builtin(vertex_index) index: u32) -> @builtin(position) vec4<f32> {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(-1.0, 1.0),
        vec2<f32>(1.0, -1.0),
        vec2<f32>(1.0, 1.0),
    );
    return vec4<f32>(corners[index], 0.0, 1.0);
}

@fragment
fn fs_main(@builtin(position) pos: vec4<f32>) -> @location(0) vec4<f32> {
    let uv = pos.xy / u_resolution.size;
    let wave = 0.5 + 0.5 * sin(u_frame.time + u_frame.angle);
    return vec4<f32>(uv, wave, 1.0);
}
"#;
}
