/// Lifecycle of the render loop.
///
/// `Idle → Ready` happens once, after startup succeeds. Every tick moves
/// `Ready`/`Rendering` to `Rendering`. There is no terminal state; the loop
/// ends when the host does.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Ready,
    Rendering,
}

impl LoopState {
    /// Records successful startup. Returns `false` if already past `Idle`.
    pub fn mark_ready(&mut self) -> bool {
        if *self != LoopState::Idle {
            return false;
        }
        *self = LoopState::Ready;
        true
    }

    /// Enters a tick. Returns `false` while `Idle`; the tick must be skipped.
    pub fn begin_tick(&mut self) -> bool {
        match self {
            LoopState::Idle => false,
            LoopState::Ready | LoopState::Rendering => {
                *self = LoopState::Rendering;
                true
            }
        }
    }
}
