//! Epicycle is a Fourier phasor engine for animated "epicycle" drawings.
//!
//! A closed planar contour is decomposed into a finite set of rotating vectors (phasors).
//! Chaining the phasors tip to tail reconstructs a point that traces an approximation of the
//! contour as time advances.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Segment`s -> [`Path`] (validated move/line/cubic/close commands)
//! 2. **Sample**: `Path -> Vec<Complex>` at equal arc-length spacing ([`sample`])
//! 3. **Decompose**: samples -> ordered [`FrequencyCoefficient`]s ([`decompose`])
//! 4. **Animate**: [`Animator::update`] per frame, then [`Animator::arm_state`] /
//!    [`Animator::last_point`], with tips collected in a [`TrailBuffer`]
//!
//! [`EpicycleSession`] wires steps 4 together for a caller that supplies time deltas.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: decomposition order is fixed (descending magnitude, then `|k|`, then
//!   positive before negative) and independent of parallel execution.
//! - **No ambient state**: geometry is a function of the owned phasor state plus explicit
//!   per-call arguments (origin, delta, speed).
//! - **No IO and no drawing**: renderers consume [`ArmPoint`]s and trail points.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
/// Session configuration and defaults.
pub mod config;
mod foundation;
mod fourier;
mod path;

pub use animation::phasor::{Animator, AnimatorStatus, ArmPoint, PhasorState};
pub use animation::session::{EpicycleSession, FrameSnapshot};
pub use animation::shape::Shape;
pub use animation::trail::TrailBuffer;
pub use config::{
    DEFAULT_PHASOR_COUNT, DEFAULT_SAMPLE_COUNT, DEFAULT_TRAIL_CAPACITY, SessionConfig,
};
pub use foundation::core::{BezPath, Complex, PathEl, Point, Vec2};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use fourier::decompose::{
    FrequencyCoefficient, decompose, frequency_indices, order_coefficients, reconstruct,
};
pub use path::model::{Path, PathBuilder, Segment};
pub use path::sampler::{DEFAULT_FLATTEN_TOLERANCE, sample, sample_with_tolerance};
