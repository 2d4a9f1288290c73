use approx::assert_abs_diff_eq;

use super::*;
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

#[test]
fn setup_derives_dt_from_path_length() {
    // dt depends on N alone, not on how many components are kept.
    assert_abs_diff_eq!(square_state(4).dt(), TAU / 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(square_state(2).dt(), TAU / 4.0, epsilon = 1e-12);
    assert_eq!(square_state(2).frames_total(), 4);
}

#[test]
fn scale_fits_chain_within_canvas_with_margin() {
    let state = square_state(4);
    let radius_sum = state.spectrum().radius_sum();

    assert!(state.scale() > 0.0);
    let reach = 2.0 * radius_sum * state.scale();
    assert!(reach <= 100.0);
    assert_abs_diff_eq!(reach, 100.0 / 1.1, epsilon = 1e-9);
}

#[test]
fn degenerate_spectrum_is_rejected_before_scaling() {
    // Every sample at the reference point: all coefficient sums are exactly
    // zero, so there is no reach to normalize against.
    let canvas = Canvas::new(100, 100).unwrap();
    let path = SampledPath::new(vec![Point::new(50.0, 50.0); 3]).unwrap();
    let spectrum = Spectrum::compute(&path, 3, canvas.center()).unwrap();

    let err = AnimationState::new(spectrum, canvas).unwrap_err();
    assert!(matches!(err, CycloError::Spectrum(_)));
}

#[test]
fn run_takes_exactly_n_frames() {
    let mut state = square_state(2);
    assert_eq!(state.run_state(), RunState::Idle);

    for i in 0..4 {
        let frame = state.step().unwrap();
        assert_eq!(frame.index, FrameIndex(i));
        assert_abs_diff_eq!(frame.time, (i as f64) * state.dt(), epsilon = 1e-12);
    }
    assert_eq!(state.run_state(), RunState::Terminated);

    let err = state.step().unwrap_err();
    assert!(matches!(err, CycloError::Animation(_)));
}

#[test]
fn trace_accumulates_most_recent_first() {
    let mut state = square_state(4);
    let first = state.step().unwrap();
    let second = state.step().unwrap();

    let trace: Vec<Point> = state.trace().iter().copied().collect();
    assert_eq!(trace, vec![second.tip, first.tip]);
}

#[test]
fn arms_chain_from_canvas_center_in_ranked_order() {
    let mut state = square_state(4);
    let frame = state.step().unwrap();

    assert_eq!(frame.arms.len(), 4);
    assert_eq!(frame.arms[0].center, Point::new(50.0, 50.0));
    for pair in frame.arms.windows(2) {
        assert_eq!(pair[1].center, pair[0].tip);
        assert!(pair[0].radius >= pair[1].radius);
    }
    assert_eq!(frame.tip, frame.arms[3].tip);
}

#[test]
fn frame_zero_tip_recovers_first_sample_under_full_truncation() {
    // With K = N the chain folded at t = 0 lands on the first translated
    // sample, scaled and re-anchored at the canvas center.
    let mut state = square_state(4);
    let scale = state.scale();
    let frame = state.step().unwrap();

    assert_abs_diff_eq!(frame.tip.x, 50.0 + scale * -50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.tip.y, 50.0 + scale * -50.0, epsilon = 1e-9);
}
