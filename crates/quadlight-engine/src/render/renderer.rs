use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::{BackingStore, DisplaySize};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::time::FrameTime;

use super::{FrameUniform, QuadPass, QuadPipeline, ResolutionUniform, UniformSet};

/// Result of one tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// One command buffer was submitted and the frame presented.
    Presented,
    /// Nothing was submitted (zero-area target or transient surface error).
    Skipped,
    /// The surface cannot recover; the loop should end.
    Fatal,
}

/// CPU-side values for one tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameUpdate {
    /// New backing-store size, if it changed this tick.
    pub resized: Option<PhysicalSize<u32>>,
    pub frame: FrameUniform,
    pub resolution: ResolutionUniform,
}

/// Host-independent per-tick state: the backing store.
#[derive(Debug, Clone, Default)]
pub struct FrameState {
    backing: BackingStore,
}

impl FrameState {
    pub fn new(backing: BackingStore) -> Self {
        Self { backing }
    }

    pub fn backing(&self) -> &BackingStore {
        &self.backing
    }

    /// Resizes the backing store for `display` (only if it changed), then
    /// derives the uniforms. The resolution always reflects this tick's size.
    pub fn advance(&mut self, display: DisplaySize, timestamp_ms: f64) -> FrameUpdate {
        let resized = self.backing.sync(display).then(|| self.backing.size());

        FrameUpdate {
            resized,
            frame: FrameUniform::from_timestamp_ms(timestamp_ms),
            resolution: ResolutionUniform::from_backing(&self.backing),
        }
    }
}

/// Everything the frame loop owns besides the device: pipeline, uniforms,
/// backing-store state and the pass description.
pub struct QuadRenderer {
    pipeline: QuadPipeline,
    uniforms: UniformSet,
    state: FrameState,
    pass: QuadPass,
}

impl QuadRenderer {
    /// Allocates the uniform buffers and bind group for `pipeline`.
    pub fn new(gpu: &Gpu<'_>, pipeline: QuadPipeline) -> Self {
        let uniforms = UniformSet::new(gpu.device(), &pipeline);

        Self {
            pipeline,
            uniforms,
            state: FrameState::new(BackingStore::new(gpu.size())),
            pass: QuadPass::default(),
        }
    }

    /// Runs one tick: resize, reconfigure, write uniforms, encode the quad
    /// pass, submit, present.
    pub fn tick(&mut self, gpu: &mut Gpu<'_>, window: &Window, time: FrameTime) -> TickOutcome {
        let display = DisplaySize::from_physical(window.inner_size(), window.scale_factor());
        let update = self.state.advance(display, time.timestamp_ms);

        if let Some(size) = update.resized {
            log::debug!("backing store resized to {}x{}", size.width, size.height);
            gpu.resize(size);
        }

        if self.state.backing().is_empty() {
            return TickOutcome::Skipped;
        }

        gpu.reconfigure();

        self.uniforms.write(gpu.queue(), update.frame, update.resolution);

        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("failed to acquire surface texture: {err}");
                return match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => TickOutcome::Fatal,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        TickOutcome::Skipped
                    }
                };
            }
        };

        self.pass.encode(
            &mut frame.encoder,
            &frame.view,
            self.pipeline.raw(),
            self.uniforms.bind_group(),
        );

        window.pre_present_notify();
        gpu.submit(frame);

        if time.frame_index % 600 == 0 {
            log::trace!(
                "frame {} at {:.1} ms, dt {:.2} ms",
                time.frame_index,
                time.timestamp_ms,
                time.dt * 1000.0
            );
        }

        TickOutcome::Presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidpi_scenario_at_two_seconds() {
        let mut state = FrameState::default();
        let update = state.advance(DisplaySize::new(800.0, 600.0, 2.0), 2000.0);

        assert_eq!(update.resized, Some(PhysicalSize::new(1600, 1200)));
        assert_eq!(state.backing().size(), PhysicalSize::new(1600, 1200));
        assert_eq!(bytemuck::cast::<_, [f32; 2]>(update.frame), [2.0, 0.6]);
        assert_eq!(bytemuck::cast::<_, [f32; 2]>(update.resolution), [1600.0, 1200.0]);
    }

    #[test]
    fn unchanged_display_does_not_resize_again() {
        let display = DisplaySize::new(800.0, 600.0, 2.0);
        let mut state = FrameState::new(BackingStore::new(PhysicalSize::new(1600, 1200)));

        let first = state.advance(display, 16.0);
        let second = state.advance(display, 32.0);

        assert_eq!(first.resized, None);
        assert_eq!(second.resized, None);
        assert_eq!(second.resolution, ResolutionUniform { width: 1600.0, height: 1200.0 });
    }

    #[test]
    fn resolution_follows_resize_in_the_same_tick() {
        let mut state = FrameState::new(BackingStore::new(PhysicalSize::new(1600, 1200)));
        let update = state.advance(DisplaySize::new(1024.0, 768.0, 1.0), 5000.0);

        assert_eq!(update.resized, Some(PhysicalSize::new(1024, 768)));
        assert_eq!(update.resolution, ResolutionUniform { width: 1024.0, height: 768.0 });
        assert_eq!(update.frame, FrameUniform::from_timestamp_ms(5000.0));
    }

    #[test]
    fn minimized_window_leaves_an_empty_backing_store() {
        let mut state = FrameState::new(BackingStore::new(PhysicalSize::new(1280, 720)));
        let update = state.advance(DisplaySize::new(0.0, 0.0, 1.0), 1.0);

        assert_eq!(update.resized, Some(PhysicalSize::new(0, 0)));
        assert!(state.backing().is_empty());
    }
}
