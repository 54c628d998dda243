/// When the surface is reconfigured during a tick.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum ReconfigurePolicy {
    /// Reconfigure only when the surface is known to need it (deferred
    /// resize, lost/outdated swapchain).
    ///
    /// `Surface::configure` rebuilds the swapchain on native backends.
    #[default]
    OnChange,
    /// Reconfigure on every tick, whether or not anything changed.
    EveryFrame,
}

/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may use. Also the set the capability probe checks.
    pub backends: wgpu::Backends,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    /// Prefer an sRGB surface format when available.
    ///
    /// When unset, the platform's preferred format (first reported by the
    /// surface) is used.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// FIFO is the only mode every platform must support and paces the loop
    /// to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Alpha compositing mode for the surface.
    ///
    /// If unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface. A hint.
    pub desired_maximum_frame_latency: u32,

    /// Per-tick surface reconfiguration behavior.
    pub reconfigure: ReconfigurePolicy,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            reconfigure: ReconfigurePolicy::OnChange,
        }
    }
}
