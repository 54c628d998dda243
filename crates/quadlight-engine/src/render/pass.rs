use std::ops::Range;

/// Commands the quad pass issues, abstracted over the encoder so the sequence
/// can be checked without a device.
pub trait PassRecorder {
    type Pipeline;
    type BindGroup;

    fn set_pipeline(&mut self, pipeline: &Self::Pipeline);
    fn set_bind_group(&mut self, index: u32, bind_group: &Self::BindGroup);
    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>);
}

impl PassRecorder for wgpu::RenderPass<'_> {
    type Pipeline = wgpu::RenderPipeline;
    type BindGroup = wgpu::BindGroup;

    fn set_pipeline(&mut self, pipeline: &wgpu::RenderPipeline) {
        wgpu::RenderPass::set_pipeline(self, pipeline);
    }

    fn set_bind_group(&mut self, index: u32, bind_group: &wgpu::BindGroup) {
        wgpu::RenderPass::set_bind_group(self, index, bind_group, &[]);
    }

    fn draw(&mut self, vertices: Range<u32>, instances: Range<u32>) {
        wgpu::RenderPass::draw(self, vertices, instances);
    }
}

/// The single pass drawn each tick: clear, then one non-indexed draw of two
/// triangles. The shader maps `vertex_index` to clip-space corners.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPass {
    pub clear: wgpu::Color,
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl Default for QuadPass {
    fn default() -> Self {
        Self {
            clear: wgpu::Color::BLACK,
            vertices: 0..6,
            instances: 0..1,
        }
    }
}

impl QuadPass {
    /// Clear to `self.clear` on load, keep the result on store.
    pub fn operations(&self) -> wgpu::Operations<wgpu::Color> {
        wgpu::Operations {
            load: wgpu::LoadOp::Clear(self.clear),
            store: wgpu::StoreOp::Store,
        }
    }

    /// Single color attachment for `view` using [`QuadPass::operations`].
    pub fn color_attachment<'a>(&self, view: &'a wgpu::TextureView) -> wgpu::RenderPassColorAttachment<'a> {
        wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: self.operations(),
            depth_slice: None,
        }
    }

    /// Records the pass body.
    pub fn record<R: PassRecorder>(&self, pass: &mut R, pipeline: &R::Pipeline, bind_group: &R::BindGroup) {
        pass.set_pipeline(pipeline);
        pass.set_bind_group(0, bind_group);
        pass.draw(self.vertices.clone(), self.instances.clone());
    }

    /// Begins the pass on `encoder`, records it, and ends it.
    pub fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        pipeline: &wgpu::RenderPipeline,
        bind_group: &wgpu::BindGroup,
    ) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quadlight quad pass"),
            color_attachments: &[Some(self.color_attachment(view))],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.record(&mut rpass, pipeline, bind_group);
    }
}
