//! Cyclotrace approximates a sampled 2D curve with a truncated discrete
//! Fourier series and replays the approximation as a chain of rotating
//! vectors (epicycles).
//!
//! # Pipeline overview
//!
//! 1. **Transform**: `SampledPath + K -> Spectrum` (ranked frequency
//!    components, amplitude-descending)
//! 2. **Animate**: `Spectrum + Canvas -> AnimationState`, stepped once per
//!    frame over synthetic time `0..2π`
//! 3. **Draw**: each frame emits advisory geometry to a [`RenderSurface`];
//!    the accumulated trace is the reconstructed curve
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the transform is pure, the coefficient
//!   sort is stable, and a run over N samples takes exactly N frames.
//! - **No rendering dependency in the core**: surfaces and frame pacing are
//!   injected ([`RenderSurface`], [`FrameScheduler`]), so every stage is
//!   testable without a host renderer or timer.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod render;
mod spectrum;

pub use animation::runner::{RunOutcome, run, run_with_cancel};
pub use animation::scheduler::{CancelToken, FrameScheduler, ImmediateScheduler};
pub use animation::state::{AnimationFrame, AnimationState, EpicycleArm, RunState};
pub use foundation::core::{Canvas, FrameIndex, Point, Vec2};
pub use foundation::error::{CycloError, CycloResult};
pub use render::surface::{RecordingSurface, RenderSurface, SurfaceOp};
pub use render::svg::trace_svg;
pub use spectrum::dft::{Coefficient, Spectrum};
pub use spectrum::path::SampledPath;
