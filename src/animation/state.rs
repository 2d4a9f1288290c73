use std::collections::VecDeque;
use std::f64::consts::TAU;

use crate::foundation::core::{Canvas, FrameIndex, Point, Vec2};
use crate::foundation::error::{CycloError, CycloResult};
use crate::spectrum::dft::Spectrum;

/// Padding factor applied when fitting the epicycle chain into the canvas.
const SCALE_PADDING: f64 = 1.1;

/// Lifecycle of one animation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// No frame stepped yet.
    Idle,
    /// Mid-run: at least one frame stepped, terminal time not reached.
    Running,
    /// All N frames stepped. No further frames may be scheduled.
    Terminated,
}

/// One rotating vector of the chain at a specific frame: a circle of `radius`
/// around `center` and an arm from `center` to `tip`. Advisory draw geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpicycleArm {
    /// Center of this component's circle (tip of the previous component).
    pub center: Point,
    /// Scaled amplitude of the component.
    pub radius: f64,
    /// End of the rotating vector at this frame's time.
    pub tip: Point,
}

/// Everything needed to draw one frame. Ephemeral; the accumulated trace
/// lives on [`AnimationState`].
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationFrame {
    /// 0-based index of this frame within the run.
    pub index: FrameIndex,
    /// Synthetic time the frame was evaluated at, `index * dt`.
    pub time: f64,
    /// Per-component geometry in amplitude-descending (nesting) order.
    pub arms: Vec<EpicycleArm>,
    /// Final position of the chain: the reconstructed curve point.
    pub tip: Point,
}

/// Explicit per-run animation state: coefficient set, derived scale and time
/// step, frame cursor, and the accumulated trace.
///
/// Time is derived as `frame_index * dt` rather than accumulated by repeated
/// addition, so a run over a path of N samples takes exactly N frames.
#[derive(Clone, Debug)]
pub struct AnimationState {
    spectrum: Spectrum,
    canvas: Canvas,
    scale: f64,
    dt: f64,
    frames_total: u64,
    frame_index: u64,
    trace: VecDeque<Point>,
}

impl AnimationState {
    /// Set up a run for a computed spectrum on the given canvas.
    ///
    /// Derives `dt = 2π / N` from the spectrum's original sample count and a
    /// constant scale normalizing the chain's total reach to fit within half
    /// the smaller canvas extent, with a 10% margin.
    ///
    /// Fails with [`CycloError::Spectrum`] when every coefficient has zero
    /// amplitude: such a set has no reach to normalize and nothing to animate.
    pub fn new(spectrum: Spectrum, canvas: Canvas) -> CycloResult<Self> {
        let radius_sum = spectrum.radius_sum();
        if radius_sum <= 0.0 {
            return Err(CycloError::spectrum(
                "all coefficients have zero amplitude; nothing to animate",
            ));
        }
        let scale = canvas.min_extent() / (2.0 * radius_sum * SCALE_PADDING);
        let frames_total = spectrum.path_len() as u64;
        let dt = TAU / (frames_total as f64);

        tracing::debug!(frames_total, dt, scale, "animation run configured");

        Ok(Self {
            spectrum,
            canvas,
            scale,
            dt,
            frames_total,
            frame_index: 0,
            trace: VecDeque::new(),
        })
    }

    /// Constant per-run scale applied to every amplitude.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Per-frame time increment, `2π / N`.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Total frames in a complete run (= N, independent of K).
    pub fn frames_total(&self) -> u64 {
        self.frames_total
    }

    /// The coefficient set driving this run.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Current lifecycle state.
    pub fn run_state(&self) -> RunState {
        if self.frame_index == 0 {
            RunState::Idle
        } else if self.frame_index < self.frames_total {
            RunState::Running
        } else {
            RunState::Terminated
        }
    }

    /// Reconstructed positions accumulated so far, most-recent-first.
    pub fn trace(&self) -> &VecDeque<Point> {
        &self.trace
    }

    /// Evaluate the next frame: fold the chain from the canvas center in
    /// coefficient (amplitude-descending) order, prepend the resulting tip to
    /// the trace, and advance the frame cursor.
    ///
    /// Stepping a terminated run is a state-machine misuse and fails with
    /// [`CycloError::Animation`].
    pub fn step(&mut self) -> CycloResult<AnimationFrame> {
        if self.frame_index >= self.frames_total {
            return Err(CycloError::animation("cannot step a terminated run"));
        }

        let time = (self.frame_index as f64) * self.dt;
        let mut tip = self.canvas.center();
        let mut arms = Vec::with_capacity(self.spectrum.len());

        for c in self.spectrum.coefficients() {
            let center = tip;
            let radius = c.amp * self.scale;
            let angle = f64::from(c.freq) * time + c.phase;
            tip = center + Vec2::new(radius * angle.cos(), radius * angle.sin());
            arms.push(EpicycleArm {
                center,
                radius,
                tip,
            });
        }

        self.trace.push_front(tip);
        let index = FrameIndex(self.frame_index);
        self.frame_index += 1;

        Ok(AnimationFrame {
            index,
            time,
            arms,
            tip,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
