use std::f64::consts::TAU;

use crate::config::{DEFAULT_PHASOR_COUNT, DEFAULT_SAMPLE_COUNT};
use crate::foundation::core::{
    Complex, Point, complex_to_point, ensure_finite, ensure_finite_point,
};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::foundation::math::{Rng64, reduce_angle_if_large};
use crate::fourier::decompose::{
    FrequencyCoefficient, decompose, frequency_indices, order_coefficients,
};
use crate::path::model::Path;
use crate::path::sampler::sample;

/// Radius range for [`Animator::synthetic`] before the `1/|k|` falloff.
const SYNTHETIC_RADIUS: (f64, f64) = (20.0, 100.0);

/// One retained frequency and its current rotation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhasorState {
    coefficient: FrequencyCoefficient,
    current_angle: f64,
}

impl PhasorState {
    fn new(coefficient: FrequencyCoefficient) -> Self {
        Self {
            coefficient,
            current_angle: coefficient.phase(),
        }
    }

    /// The immutable coefficient this phasor was built from.
    pub fn coefficient(&self) -> FrequencyCoefficient {
        self.coefficient
    }

    /// Accumulated angle in radians; not normalized.
    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    /// Circle radius, `|c|`.
    pub fn radius(&self) -> f64 {
        self.coefficient.magnitude()
    }

    /// The rotated vector `|c| * exp(i * angle)`.
    pub fn vector(&self) -> Complex {
        Complex::from_polar(self.radius(), self.current_angle)
    }
}

/// One link of the arm: the tip of a phasor and the radius of its circle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArmPoint {
    /// Tip x coordinate.
    pub x: f64,
    /// Tip y coordinate.
    pub y: f64,
    /// Magnitude of the phasor ending here.
    pub radius: f64,
}

impl ArmPoint {
    /// Tip position.
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Lifecycle of an [`Animator`]; there is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AnimatorStatus {
    /// Constructed or reset; every angle equals its coefficient phase.
    Idle,
    /// At least one `update` has been applied.
    Running,
}

/// Owns the phasor set and advances it frame by frame.
///
/// An animator always holds at least one phasor, so the geometry queries are total.
#[derive(Clone, Debug)]
pub struct Animator {
    phasors: Vec<PhasorState>,
    elapsed: f64,
    status: AnimatorStatus,
}

impl Animator {
    /// Build from coefficients already in rendering order.
    pub fn from_coefficients(coeffs: Vec<FrequencyCoefficient>) -> EpicycleResult<Self> {
        if coeffs.is_empty() {
            return Err(EpicycleError::invalid_state(
                "animator requires at least one coefficient",
            ));
        }
        let phasors = coeffs
            .into_iter()
            .map(|c| FrequencyCoefficient::new(c.index, c.coefficient).map(PhasorState::new))
            .collect::<EpicycleResult<Vec<_>>>()?;
        Ok(Self {
            phasors,
            elapsed: 0.0,
            status: AnimatorStatus::Idle,
        })
    }

    /// Sample and decompose `path` with the default sample count.
    pub fn from_path(path: &Path, phasor_count: usize) -> EpicycleResult<Self> {
        let samples = sample(path, DEFAULT_SAMPLE_COUNT.max(phasor_count))?;
        Self::from_coefficients(decompose(&samples, phasor_count)?)
    }

    /// Axis-aligned `width x height` rectangle centered on the origin.
    pub fn rectangle(width: f64, height: f64) -> EpicycleResult<Self> {
        Self::from_path(&rectangle_path(width, height)?, DEFAULT_PHASOR_COUNT)
    }

    /// Out-and-back loop over the segment `start -> end`.
    pub fn line_segment(start: Point, end: Point) -> EpicycleResult<Self> {
        Self::from_path(&line_segment_path(start, end)?, DEFAULT_PHASOR_COUNT)
    }

    /// Pseudo-random demo set of `count` phasors, deterministic per `seed`.
    ///
    /// Radii are uniform in a fixed range and fall off as `1/|k|`; the DC term is dropped to
    /// zero so the figure stays centered. Phases are uniform in `[0, 2π)`.
    pub fn synthetic(count: usize, seed: u64) -> EpicycleResult<Self> {
        if count == 0 {
            return Err(EpicycleError::invalid_argument(
                "synthetic phasor count must be > 0",
            ));
        }
        let mut rng = Rng64::new(seed);
        let mut coeffs = frequency_indices(count)
            .map(|k| {
                let radius = rng.range(SYNTHETIC_RADIUS.0, SYNTHETIC_RADIUS.1);
                let phase = rng.range(0.0, TAU);
                let magnitude = if k == 0 {
                    0.0
                } else {
                    radius / f64::from(k.unsigned_abs())
                };
                FrequencyCoefficient::from_polar(k, magnitude, phase)
            })
            .collect::<EpicycleResult<Vec<_>>>()?;
        order_coefficients(&mut coeffs);
        Self::from_coefficients(coeffs)
    }

    /// Canned harmonic set: `radius/|k|` for `k != 0`, all starting at a quarter turn.
    pub fn harmonic(count: usize, radius: f64) -> EpicycleResult<Self> {
        if count == 0 {
            return Err(EpicycleError::invalid_argument(
                "harmonic phasor count must be > 0",
            ));
        }
        ensure_finite("harmonic radius", radius)?;
        let mut coeffs = frequency_indices(count)
            .map(|k| {
                let magnitude = if k == 0 {
                    0.0
                } else {
                    radius / f64::from(k.unsigned_abs())
                };
                FrequencyCoefficient::from_polar(k, magnitude, std::f64::consts::FRAC_PI_2)
            })
            .collect::<EpicycleResult<Vec<_>>>()?;
        order_coefficients(&mut coeffs);
        Self::from_coefficients(coeffs)
    }

    /// Advance every phasor by `index * speed_scale * 2π * delta_secs`.
    ///
    /// A zero delta leaves all angles untouched. Fails without touching any state when a
    /// rotation step would not be finite.
    pub fn update(&mut self, delta_secs: f64, speed_scale: f64) -> EpicycleResult<()> {
        ensure_finite("delta time", delta_secs)?;
        ensure_finite("speed scale", speed_scale)?;
        if delta_secs < 0.0 {
            return Err(EpicycleError::invalid_argument(format!(
                "delta time must be >= 0, got {delta_secs}"
            )));
        }

        if delta_secs == 0.0 {
            self.status = AnimatorStatus::Running;
            return Ok(());
        }

        let turn = speed_scale * TAU * delta_secs;
        let angles = self
            .phasors
            .iter()
            .map(|p| {
                let angle = p.current_angle + f64::from(p.coefficient.index) * turn;
                if angle.is_finite() {
                    Ok(angle)
                } else {
                    Err(EpicycleError::invalid_argument(format!(
                        "rotation overflows for index {} (delta {delta_secs}, speed {speed_scale})",
                        p.coefficient.index
                    )))
                }
            })
            .collect::<EpicycleResult<Vec<_>>>()?;

        for (p, angle) in self.phasors.iter_mut().zip(angles) {
            p.current_angle = reduce_angle_if_large(angle);
        }
        self.elapsed += delta_secs;
        self.status = AnimatorStatus::Running;
        Ok(())
    }

    /// Chained arm geometry starting at `(origin_x, origin_y)`, one entry per phasor.
    ///
    /// Entry `i` is the tip of phasor `i` (the center of phasor `i + 1`), with phasor `i`'s
    /// radius. The last entry is the traced point.
    pub fn arm_state(&self, origin_x: f64, origin_y: f64) -> Vec<ArmPoint> {
        self.phasors
            .iter()
            .scan(Complex::new(origin_x, origin_y), |pos, p| {
                *pos += p.vector();
                Some(ArmPoint {
                    x: pos.re,
                    y: pos.im,
                    radius: p.radius(),
                })
            })
            .collect()
    }

    /// The traced point; equal to the last entry of [`Animator::arm_state`].
    pub fn last_point(&self, origin_x: f64, origin_y: f64) -> Point {
        let mut pos = Complex::new(origin_x, origin_y);
        for p in &self.phasors {
            pos += p.vector();
        }
        complex_to_point(pos)
    }

    /// Restore every angle to its coefficient phase.
    pub fn reset(&mut self) {
        for p in &mut self.phasors {
            p.current_angle = p.coefficient.phase();
        }
        self.elapsed = 0.0;
        self.status = AnimatorStatus::Idle;
    }

    /// Phasors in rendering order.
    pub fn phasors(&self) -> &[PhasorState] {
        &self.phasors
    }

    /// Coefficients in rendering order.
    pub fn coefficients(&self) -> impl Iterator<Item = FrequencyCoefficient> + '_ {
        self.phasors.iter().map(|p| p.coefficient)
    }

    /// Number of phasors (always at least one).
    pub fn phasor_count(&self) -> usize {
        self.phasors.len()
    }

    /// Sum of every delta applied since construction or the last reset.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Current lifecycle state.
    pub fn status(&self) -> AnimatorStatus {
        self.status
    }
}

pub(crate) fn rectangle_path(width: f64, height: f64) -> EpicycleResult<Path> {
    for (what, v) in [("rectangle width", width), ("rectangle height", height)] {
        if ensure_finite(what, v)? <= 0.0 {
            return Err(EpicycleError::invalid_argument(format!(
                "{what} must be > 0, got {v}"
            )));
        }
    }
    let (hw, hh) = (width / 2.0, height / 2.0);
    Path::builder()
        .move_to((-hw, -hh))?
        .line_to((hw, -hh))?
        .line_to((hw, hh))?
        .line_to((-hw, hh))?
        .close()?
        .build()
}

pub(crate) fn line_segment_path(start: Point, end: Point) -> EpicycleResult<Path> {
    ensure_finite_point("line segment start", start)?;
    ensure_finite_point("line segment end", end)?;
    Path::builder().move_to(start)?.line_to(end)?.close()?.build()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phasor.rs"]
mod tests;
