//! Display and backing-store sizing.
//!
//! Two spaces are involved:
//! - logical pixels: the size the window is displayed at (DPI independent)
//! - physical pixels: the backing store the GPU renders into

mod backing;

pub use backing::{BackingStore, DisplaySize};
