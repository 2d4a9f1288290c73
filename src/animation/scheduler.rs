use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Host pacing capability for a frame-driven run.
///
/// The runner calls [`next_frame`](Self::next_frame) between frames,
/// conceptually "run the next frame before the coming display refresh".
/// Production hosts bind this to their refresh primitive; tests use
/// [`ImmediateScheduler`] so runs are deterministic and timing-free.
/// Returning `false` refuses the next frame and ends the run where it stands.
pub trait FrameScheduler {
    /// Yield until the host is ready for another frame. `false` stops the run.
    fn next_frame(&mut self) -> bool;
}

/// Scheduler that is always ready: frames run back-to-back with no pacing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn next_frame(&mut self) -> bool {
        true
    }
}

/// Cloneable cancellation handle for a running animation.
///
/// The runner checks the token between frames; once cancelled, no further
/// frame is scheduled and the trace stays in whatever partial state it
/// reached. Starting a new approximation over the same surface must cancel
/// the prior run first, so two runs never write to one trace concurrently.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// New, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; takes effect before the next frame.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
