use winit::window::Window;

use crate::core::{startup, Bootstrap, StartupError};
use crate::device::{gpu_api_available, Gpu, GpuInit};
use crate::render::{QuadPipeline, QuadRenderer, TickOutcome};
use crate::shader::{ShaderError, ShaderSource};
use crate::time::FrameTime;

/// wgpu-backed startup steps for one window.
struct WgpuBootstrap<'a, 'w> {
    window: &'w Window,
    init: GpuInit,
    shader: &'a ShaderSource,
}

impl<'w> Bootstrap for WgpuBootstrap<'_, 'w> {
    type Context = Gpu<'w>;
    type Pipeline = QuadPipeline;

    fn gpu_available(&self) -> bool {
        gpu_api_available(self.init.backends)
    }

    fn init_context(&mut self) -> anyhow::Result<Gpu<'w>> {
        pollster::block_on(Gpu::new(self.window, self.init.clone()))
    }

    fn build_pipeline(&mut self, gpu: &Gpu<'w>) -> Result<QuadPipeline, ShaderError> {
        QuadPipeline::build(gpu.device(), gpu.surface_format(), self.shader)
    }
}

/// Device plus the renderer built on it; lives as long as its window.
pub(crate) struct Stage<'w> {
    gpu: Gpu<'w>,
    renderer: QuadRenderer,
}

impl<'w> Stage<'w> {
    /// Probe, context, pipeline, then the one-time uniform/bind-group setup.
    pub(crate) fn start(
        window: &'w Window,
        init: GpuInit,
        shader: &ShaderSource,
    ) -> Result<Self, StartupError> {
        let mut boot = WgpuBootstrap {
            window,
            init,
            shader,
        };

        let (gpu, pipeline) = startup(&mut boot)?;
        let renderer = QuadRenderer::new(&gpu, pipeline);

        Ok(Self { gpu, renderer })
    }

    pub(crate) fn tick(&mut self, window: &Window, time: FrameTime) -> TickOutcome {
        self.renderer.tick(&mut self.gpu, window, time)
    }
}
