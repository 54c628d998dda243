//! quadlight engine crate.
//!
//! Opens a window, brings up wgpu, compiles one WGSL program and draws it on a
//! fullscreen quad every display refresh.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
