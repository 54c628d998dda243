use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::LoopState;
use crate::device::GpuInit;
use crate::render::TickOutcome;
use crate::shader::ShaderSource;
use crate::time::FrameClock;

use super::stage::Stage;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "quadlight".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, starts the GPU and renders `shader` until the window
    /// is closed.
    ///
    /// Startup failures end the event loop and are returned; nothing is
    /// logged here, so the caller reports each failure exactly once.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, shader: ShaderSource) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, shader);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    stage: Stage<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    shader: ShaderSource,

    loop_state: LoopState,
    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, shader: ShaderSource) -> Self {
        Self {
            config,
            gpu_init,
            shader,
            loop_state: LoopState::Idle,
            entry: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.failure.get_or_insert(err);
        self.entry = None;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let shader = self.shader.clone();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::new(),
            window,
            stage_builder: |w| Stage::start(w, gpu_init, &shader),
        }
        .try_build()?;

        Ok(entry)
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.failure.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
                self.loop_state.mark_ready();
                log::debug!("render loop ready");
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces it to the display.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
            }

            // The tick picks up the new size; just make sure one happens.
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = &self.entry {
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                if !self.loop_state.begin_tick() {
                    return;
                }
                let Some(entry) = self.entry.as_mut() else {
                    return;
                };

                let outcome = entry.with_mut(|fields| {
                    let time = fields.clock.tick();
                    fields.stage.tick(fields.window, time)
                });

                if outcome == TickOutcome::Fatal {
                    self.fail(
                        event_loop,
                        anyhow::anyhow!("surface is out of memory; stopping render loop"),
                    );
                }
            }

            _ => {}
        }
    }
}
