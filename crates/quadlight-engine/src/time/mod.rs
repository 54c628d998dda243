//! Time subsystem.
//!
//! Provides stable, testable frame timing without coupling to the runtime.
//! One `FrameClock` per render loop; call `tick()` once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
