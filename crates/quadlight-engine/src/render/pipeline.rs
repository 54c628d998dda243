use crate::shader::{self, ShaderError, ShaderSource};

/// The fullscreen-quad render pipeline.
///
/// One shader module supplies both stages. The layout is derived from the
/// shader's declared bindings (`layout: None`), so the bind group layout must
/// be fetched back from the pipeline.
pub struct QuadPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl QuadPipeline {
    /// Compiles `source` and builds the pipeline for `format`.
    ///
    /// The shader is validated on the host first; no GPU object is created for
    /// a shader that would not link.
    pub fn build(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        source: &ShaderSource,
    ) -> Result<Self, ShaderError> {
        shader::validate(source)?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(source.label.as_ref()),
            source: wgpu::ShaderSource::Wgsl(source.code.clone()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadlight quad pipeline"),
            layout: None,

            vertex: wgpu::VertexState {
                module: &module,
                entry_point: Some(shader::VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: Some(shader::FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("quad pipeline built for {format:?} from {}", source.label);

        Ok(Self { pipeline })
    }

    #[inline]
    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Auto-derived layout of `@group(0)`.
    pub fn uniform_layout(&self) -> wgpu::BindGroupLayout {
        self.pipeline.get_bind_group_layout(0)
    }
}
