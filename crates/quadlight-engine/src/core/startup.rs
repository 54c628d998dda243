use std::fmt;

use crate::shader::ShaderError;

/// The startup steps, in the order [`startup`] runs them.
pub trait Bootstrap {
    /// Device, queue and configured surface.
    type Context;
    type Pipeline;

    /// Capability probe. Must not create GPU objects.
    fn gpu_available(&self) -> bool;

    /// Acquires adapter/device and configures the surface.
    fn init_context(&mut self) -> anyhow::Result<Self::Context>;

    /// Compiles the shader into the render pipeline.
    fn build_pipeline(&mut self, ctx: &Self::Context) -> Result<Self::Pipeline, ShaderError>;
}

/// Why startup stopped. Every variant is fatal; nothing is retried.
#[derive(Debug)]
pub enum StartupError {
    /// No GPU API is reachable. No GPU object was created.
    GpuUnavailable,
    /// Adapter/device acquisition or surface setup failed.
    Context(anyhow::Error),
    /// The shader could not be turned into a pipeline.
    Pipeline(ShaderError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpuUnavailable => f.write_str("no GPU API is available on this platform"),
            Self::Context(_) => f.write_str("GPU initialization failed"),
            Self::Pipeline(_) => f.write_str("render pipeline creation failed"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GpuUnavailable => None,
            Self::Context(err) => Some(err.as_ref()),
            Self::Pipeline(err) => Some(err),
        }
    }
}

/// Runs probe, context initialization and pipeline creation, stopping at the
/// first failure. Later steps never run after an earlier one fails.
pub fn startup<B: Bootstrap>(boot: &mut B) -> Result<(B::Context, B::Pipeline), StartupError> {
    if !boot.gpu_available() {
        return Err(StartupError::GpuUnavailable);
    }

    let ctx = boot.init_context().map_err(StartupError::Context)?;
    let pipeline = boot.build_pipeline(&ctx).map_err(StartupError::Pipeline)?;

    Ok((ctx, pipeline))
}
