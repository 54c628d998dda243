/// Returns `true` when this build can reach at least one of `requested`.
///
/// This only inspects the backends compiled into wgpu; it creates no
/// instance, surface or device, so it is safe to call before deciding
/// whether to start up at all.
pub fn gpu_api_available(requested: wgpu::Backends) -> bool {
    wgpu::Instance::enabled_backend_features().intersects(requested)
}
