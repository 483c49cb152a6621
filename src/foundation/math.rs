use std::f64::consts::TAU;

/// Angles beyond this magnitude are folded back into `[0, 2π)`.
///
/// Geometry depends only on `sin`/`cos` of an angle, so folding is exact up to rounding; the
/// threshold keeps short sessions bit-for-bit unwrapped.
pub(crate) const ANGLE_REDUCE_THRESHOLD: f64 = TAU * (1u64 << 20) as f64;

/// Fold `angle` into `[0, 2π)`.
pub(crate) fn reduce_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Fold `angle` only once it has grown past [`ANGLE_REDUCE_THRESHOLD`].
pub(crate) fn reduce_angle_if_large(angle: f64) -> f64 {
    if angle.abs() > ANGLE_REDUCE_THRESHOLD {
        tracing::trace!(angle, "reducing phasor angle");
        reduce_angle(angle)
    } else {
        angle
    }
}

/// Small deterministic generator for demo coefficient sets.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub(crate) fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform draw from `[lo, hi)`.
    pub(crate) fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
