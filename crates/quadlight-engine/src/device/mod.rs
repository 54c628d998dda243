//! GPU device + surface management.
//!
//! This module is responsible for:
//! - probing whether any GPU API is usable in this build
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering

mod gpu;
mod init;
mod probe;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::{GpuInit, ReconfigurePolicy};
pub use probe::gpu_api_available;
pub use surface::SurfaceErrorAction;
