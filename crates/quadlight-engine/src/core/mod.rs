//! Startup sequencing and the frame-loop lifecycle.
//!
//! Independent of winit: the window runtime drives these, and tests drive
//! them with mocks.

mod startup;
mod state;

pub use startup::{startup, Bootstrap, StartupError};
pub use state::LoopState;
