use std::cmp::Ordering;
use std::f64::consts::TAU;

use rayon::prelude::*;

use crate::foundation::core::{Complex, ensure_finite_complex};
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Below this many `samples x coefficients` terms the summation stays on the calling thread.
const PARALLEL_MIN_TERMS: usize = 1 << 16;

/// A Fourier coefficient tagged with its signed frequency index.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrequencyCoefficient {
    /// Rotation rate multiplier relative to the fundamental.
    pub index: i32,
    /// Amplitude and phase at `t = 0`.
    pub coefficient: Complex,
}

impl FrequencyCoefficient {
    /// Create a coefficient, rejecting non-finite components.
    pub fn new(index: i32, coefficient: Complex) -> EpicycleResult<Self> {
        ensure_finite_complex("coefficient", coefficient)?;
        Ok(Self { index, coefficient })
    }

    /// Create a coefficient from polar form.
    pub fn from_polar(index: i32, magnitude: f64, phase: f64) -> EpicycleResult<Self> {
        Self::new(index, Complex::from_polar(magnitude, phase))
    }

    /// `|c|`, the radius of this phasor's circle.
    pub fn magnitude(&self) -> f64 {
        self.coefficient.norm()
    }

    /// `arg(c)`, the phasor angle at `t = 0`.
    pub fn phase(&self) -> f64 {
        self.coefficient.arg()
    }
}

/// Frequency indices retained for `count` coefficients: `0, 1, -1, 2, -2, ...`.
pub fn frequency_indices(count: usize) -> impl Iterator<Item = i32> {
    (0..count).map(|i| {
        let k = i.div_ceil(2) as i32;
        if i % 2 == 0 { -k } else { k }
    })
}

/// Discrete Fourier decomposition of one period of a sampled closed curve.
///
/// For each index `k` from [`frequency_indices`] this computes
/// `c_k = (1/M) * sum_n samples[n] * exp(-i*2*pi*k*n/M)` with `M = samples.len()`, then orders
/// the result with [`order_coefficients`]. Zero-magnitude terms are kept so the output always
/// holds exactly `phasor_count` entries.
#[tracing::instrument(skip(samples), fields(samples = samples.len()))]
pub fn decompose(
    samples: &[Complex],
    phasor_count: usize,
) -> EpicycleResult<Vec<FrequencyCoefficient>> {
    if phasor_count == 0 {
        return Err(EpicycleError::invalid_argument("phasor count must be > 0"));
    }
    if samples.len() < phasor_count {
        return Err(EpicycleError::insufficient_samples(
            phasor_count,
            samples.len(),
        ));
    }
    for s in samples {
        ensure_finite_complex("sample", *s)?;
    }

    let indices: Vec<i32> = frequency_indices(phasor_count).collect();
    let mut coeffs: Vec<FrequencyCoefficient> =
        if samples.len().saturating_mul(phasor_count) >= PARALLEL_MIN_TERMS {
            indices
                .par_iter()
                .map(|&k| dft_term(samples, k))
                .collect()
        } else {
            indices.iter().map(|&k| dft_term(samples, k)).collect()
        };

    order_coefficients(&mut coeffs);
    tracing::debug!(
        retained = coeffs.len(),
        dominant = coeffs.first().map(|c| c.index),
        "decomposed samples"
    );
    Ok(coeffs)
}

fn dft_term(samples: &[Complex], k: i32) -> FrequencyCoefficient {
    let m = samples.len() as i64;
    let k = i64::from(k);
    let sum: Complex = samples
        .iter()
        .enumerate()
        .map(|(n, s)| {
            // Reduce k*n modulo M before scaling so the angle stays in [0, 2*pi).
            let r = (k * n as i64).rem_euclid(m);
            s * Complex::cis(-TAU * r as f64 / m as f64)
        })
        .sum();
    FrequencyCoefficient {
        index: k as i32,
        coefficient: sum / m as f64,
    }
}

/// Sort into rendering order: descending magnitude, then ascending `|k|`, then positive `k`
/// before negative.
pub fn order_coefficients(coeffs: &mut [FrequencyCoefficient]) {
    coeffs.sort_by(compare_render_order);
}

fn compare_render_order(a: &FrequencyCoefficient, b: &FrequencyCoefficient) -> Ordering {
    b.magnitude()
        .total_cmp(&a.magnitude())
        .then_with(|| a.index.unsigned_abs().cmp(&b.index.unsigned_abs()))
        .then_with(|| b.index.signum().cmp(&a.index.signum()))
}

/// Evaluate the truncated series at normalized time `t` (one period per unit).
pub fn reconstruct(coeffs: &[FrequencyCoefficient], t: f64) -> Complex {
    coeffs
        .iter()
        .map(|c| c.coefficient * Complex::cis(TAU * f64::from(c.index) * t))
        .sum()
}

#[cfg(test)]
#[path = "../../tests/unit/fourier/decompose.rs"]
mod tests;
