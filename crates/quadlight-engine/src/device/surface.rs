use winit::dpi::PhysicalSize;

use super::ReconfigurePolicy;

/// What the frame loop does after failing to acquire a surface texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Swapchain was lost or outdated and has been reconfigured; skip this tick.
    Reconfigured,
    /// Transient (timeout, driver hiccup); skip this tick.
    SkipFrame,
    /// Out of memory; the loop cannot continue.
    Fatal,
}

/// Picks the surface format.
///
/// The surface lists its formats in platform preference order, so the first
/// entry is the platform's preferred format.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        if let Some(srgb) = formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(srgb);
        }
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Applies a new drawable size to the configuration.
///
/// Returns `false` when the size is zero-area; wgpu rejects configuring a 0x0
/// surface, so the caller must defer configuration.
pub(crate) fn apply_size(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;

    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

/// Whether the surface should be configured this tick.
///
/// A zero-area surface is never configured. Otherwise `EveryFrame` always
/// configures and `OnChange` only when a configuration is pending.
pub(crate) fn should_configure(
    policy: ReconfigurePolicy,
    pending: bool,
    size: PhysicalSize<u32>,
) -> bool {
    if size.width == 0 || size.height == 0 {
        return false;
    }
    match policy {
        ReconfigurePolicy::EveryFrame => true,
        ReconfigurePolicy::OnChange => pending,
    }
}

/// Tracks whether the swapchain configuration is stale.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct SurfaceSync {
    policy: ReconfigurePolicy,
    pending: bool,
}

impl SurfaceSync {
    pub(crate) fn new(policy: ReconfigurePolicy) -> Self {
        Self {
            policy,
            pending: false,
        }
    }

    /// After a resize: `applied` is the result of [`apply_size`]. Returns
    /// whether to configure now; a deferred (zero-area) resize stays pending.
    pub(crate) fn on_resize(&mut self, applied: bool) -> bool {
        self.pending = !applied;
        applied
    }

    /// The swapchain was lost or outdated.
    pub(crate) fn invalidate(&mut self) {
        self.pending = true;
    }

    /// Per-tick decision. Clears the pending flag when it says yes.
    pub(crate) fn on_tick(&mut self, size: PhysicalSize<u32>) -> bool {
        let configure = should_configure(self.policy, self.pending, size);
        if configure {
            self.pending = false;
        }
        configure
    }
}

pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}
