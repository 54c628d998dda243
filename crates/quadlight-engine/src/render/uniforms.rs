use bytemuck::{Pod, Zeroable};

use crate::coords::BackingStore;
use crate::shader::{FRAME_BINDING, RESOLUTION_BINDING};

use super::QuadPipeline;

/// Radians per second the `angle` uniform advances.
pub const ANGULAR_VELOCITY: f64 = 0.3;

/// `@group(0) @binding(0)`: seconds since start and the derived angle.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FrameUniform {
    pub time: f32,
    pub angle: f32,
}

impl FrameUniform {
    /// `time = T / 1000`, `angle = time * 0.3`.
    ///
    /// Computed in f64 and narrowed once, so the values are exactly the f32
    /// nearest to the f64 results.
    pub fn from_timestamp_ms(timestamp_ms: f64) -> Self {
        let time = timestamp_ms / 1000.0;
        let angle = time * ANGULAR_VELOCITY;
        Self {
            time: time as f32,
            angle: angle as f32,
        }
    }
}

/// `@group(0) @binding(1)`: backing-store size in physical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ResolutionUniform {
    pub width: f32,
    pub height: f32,
}

impl ResolutionUniform {
    pub fn from_backing(backing: &BackingStore) -> Self {
        let [width, height] = backing.resolution();
        Self { width, height }
    }
}

/// The two uniform buffers and the bind group that exposes them.
///
/// Created once after the pipeline; both buffers are fully overwritten every
/// tick before the pass that reads them is encoded.
pub struct UniformSet {
    frame_ubo: wgpu::Buffer,
    resolution_ubo: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSet {
    pub fn new(device: &wgpu::Device, pipeline: &QuadPipeline) -> Self {
        let frame_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadlight frame ubo"),
            size: std::mem::size_of::<FrameUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let resolution_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadlight resolution ubo"),
            size: std::mem::size_of::<ResolutionUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadlight uniforms bind group"),
            layout: &pipeline.uniform_layout(),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: FRAME_BINDING,
                    resource: frame_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: RESOLUTION_BINDING,
                    resource: resolution_ubo.as_entire_binding(),
                },
            ],
        });

        Self {
            frame_ubo,
            resolution_ubo,
            bind_group,
        }
    }

    /// Overwrites both buffers in full.
    pub fn write(&self, queue: &wgpu::Queue, frame: FrameUniform, resolution: ResolutionUniform) {
        queue.write_buffer(&self.frame_ubo, 0, bytemuck::bytes_of(&frame));
        queue.write_buffer(&self.resolution_ubo, 0, bytemuck::bytes_of(&resolution));
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    #[test]
    fn angle_is_time_times_angular_velocity() {
        for t in [0.0, 1.0, 16.667, 2000.0, 123_456.789, 86_400_000.0] {
            let u = FrameUniform::from_timestamp_ms(t);
            assert_eq!(u.time, (t / 1000.0) as f32);
            assert_eq!(u.angle, ((t / 1000.0) * 0.3) as f32);
        }
    }

    #[test]
    fn time_zero_is_all_zero() {
        assert_eq!(
            FrameUniform::from_timestamp_ms(0.0),
            FrameUniform { time: 0.0, angle: 0.0 }
        );
    }

    #[test]
    fn uniforms_are_two_packed_floats() {
        assert_eq!(std::mem::size_of::<FrameUniform>(), 8);
        assert_eq!(std::mem::size_of::<ResolutionUniform>(), 8);

        let bytes = bytemuck::bytes_of(&FrameUniform { time: 2.0, angle: 0.6 });
        assert_eq!(&bytes[0..4], &2.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0.6f32.to_ne_bytes());
    }

    #[test]
    fn resolution_tracks_backing_store() {
        let backing = BackingStore::new(PhysicalSize::new(1600, 1200));
        assert_eq!(
            ResolutionUniform::from_backing(&backing),
            ResolutionUniform { width: 1600.0, height: 1200.0 }
        );
    }
}
