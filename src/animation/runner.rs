use crate::animation::scheduler::{CancelToken, FrameScheduler};
use crate::animation::state::{AnimationState, RunState};
use crate::foundation::core::Point;
use crate::foundation::error::CycloResult;
use crate::render::surface::RenderSurface;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// All N frames ran and the finished trace was committed to the surface.
    Completed,
    /// The token or the scheduler stopped the run; the trace is partial.
    Cancelled,
}

/// Drive a run to its terminal state, pacing frames through `scheduler`.
///
/// Convenience wrapper over [`run_with_cancel`] with a token nobody holds.
pub fn run(
    state: &mut AnimationState,
    surface: &mut dyn RenderSurface,
    scheduler: &mut dyn FrameScheduler,
) -> CycloResult<RunOutcome> {
    run_with_cancel(state, surface, scheduler, &CancelToken::new())
}

/// Drive a run frame by frame until it terminates or is cancelled.
///
/// Per frame: clear the surface, stroke one circle and one arm segment per
/// chain component (nested in amplitude-descending order), then stroke the
/// accumulated trace. Between frames the token is checked and the scheduler
/// asked for the next slot; either may end the run with a partial trace.
/// On the terminal frame the finished trace is stroked once more as the
/// committed output.
#[tracing::instrument(skip_all)]
pub fn run_with_cancel(
    state: &mut AnimationState,
    surface: &mut dyn RenderSurface,
    scheduler: &mut dyn FrameScheduler,
    cancel: &CancelToken,
) -> CycloResult<RunOutcome> {
    while state.run_state() != RunState::Terminated {
        let frame = state.step()?;

        surface.clear()?;
        for arm in &frame.arms {
            surface.stroke_circle(arm.center, arm.radius)?;
            surface.stroke_segment(arm.center, arm.tip)?;
        }
        surface.stroke_polyline(&trace_points(state))?;

        if state.run_state() == RunState::Terminated {
            break;
        }
        if cancel.is_cancelled() || !scheduler.next_frame() {
            tracing::debug!(frames_run = frame.index.0 + 1, "run cancelled");
            return Ok(RunOutcome::Cancelled);
        }
    }

    // Terminal state: commit the finished curve.
    surface.stroke_polyline(&trace_points(state))?;
    tracing::debug!(frames_run = state.frames_total(), "run completed");
    Ok(RunOutcome::Completed)
}

fn trace_points(state: &AnimationState) -> Vec<Point> {
    state.trace().iter().copied().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/runner.rs"]
mod tests;
