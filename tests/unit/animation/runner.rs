use super::*;
use crate::animation::scheduler::ImmediateScheduler;
use crate::foundation::core::Canvas;
use crate::render::surface::{RecordingSurface, SurfaceOp};
use crate::spectrum::dft::Spectrum;
use crate::spectrum::path::SampledPath;

fn square_state(num_coefficients: usize) -> AnimationState {
    let path = SampledPath::new(vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ])
    .unwrap();
    let canvas = Canvas::new(100, 100).unwrap();
    let spectrum = Spectrum::compute(&path, num_coefficients, canvas.center()).unwrap();
    AnimationState::new(spectrum, canvas).unwrap()
}

/// Scheduler that grants a fixed number of follow-up frames, then refuses.
struct CountdownScheduler {
    remaining: u32,
}

impl FrameScheduler for CountdownScheduler {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

fn count_ops(surface: &RecordingSurface) -> (usize, usize, usize, usize) {
    let mut clears = 0;
    let mut circles = 0;
    let mut segments = 0;
    let mut polylines = 0;
    for op in surface.ops() {
        match op {
            SurfaceOp::Clear => clears += 1,
            SurfaceOp::Circle { .. } => circles += 1,
            SurfaceOp::Segment { .. } => segments += 1,
            SurfaceOp::Polyline { .. } => polylines += 1,
        }
    }
    (clears, circles, segments, polylines)
}

#[test]
fn completed_run_draws_every_frame_then_commits_trace() {
    let mut state = square_state(4);
    let mut surface = RecordingSurface::new();
    let outcome = run(&mut state, &mut surface, &mut ImmediateScheduler).unwrap();

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(state.run_state(), RunState::Terminated);

    // 4 frames * (1 clear + 4 circles + 4 segments + 1 trace) + terminal commit.
    let (clears, circles, segments, polylines) = count_ops(&surface);
    assert_eq!(clears, 4);
    assert_eq!(circles, 16);
    assert_eq!(segments, 16);
    assert_eq!(polylines, 5);

    let committed = surface.last_polyline().unwrap();
    assert_eq!(committed.len(), 4);
    let trace: Vec<Point> = state.trace().iter().copied().collect();
    assert_eq!(committed, trace.as_slice());
}

#[test]
fn terminal_commit_repeats_the_final_trace() {
    let mut state = square_state(2);
    let mut surface = RecordingSurface::new();
    run(&mut state, &mut surface, &mut ImmediateScheduler).unwrap();

    let polylines: Vec<&SurfaceOp> = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, SurfaceOp::Polyline { .. }))
        .collect();
    assert_eq!(polylines[polylines.len() - 1], polylines[polylines.len() - 2]);
}

#[test]
fn scheduler_refusal_leaves_a_partial_trace() {
    let mut state = square_state(4);
    let mut surface = RecordingSurface::new();
    let mut scheduler = CountdownScheduler { remaining: 1 };

    let outcome = run(&mut state, &mut surface, &mut scheduler).unwrap();
    assert_eq!(outcome, RunOutcome::Cancelled);
    assert_eq!(state.run_state(), RunState::Running);
    assert_eq!(state.trace().len(), 2);

    // No terminal commit after a cancelled run.
    let (clears, _, _, polylines) = count_ops(&surface);
    assert_eq!(clears, 2);
    assert_eq!(polylines, 2);
}

#[test]
fn run_reports_progress_under_a_fmt_subscriber() {
    // The runner and transform are instrumented; a full run under a real
    // subscriber must complete and emit through it without panicking.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mut state = square_state(4);
    let mut surface = RecordingSurface::new();
    let outcome = run(&mut state, &mut surface, &mut ImmediateScheduler).unwrap();
    assert_eq!(outcome, RunOutcome::Completed);
}

#[test]
fn cancel_token_stops_after_the_current_frame() {
    let mut state = square_state(4);
    let mut surface = RecordingSurface::new();
    let token = CancelToken::new();
    token.cancel();

    let outcome =
        run_with_cancel(&mut state, &mut surface, &mut ImmediateScheduler, &token).unwrap();
    assert_eq!(outcome, RunOutcome::Cancelled);
    assert_eq!(state.trace().len(), 1);
}
