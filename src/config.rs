//! Session configuration.
//!
//! Loaded from JSON by the binary; every field has a default so partial documents are valid.

use crate::foundation::core::{Point, ensure_finite, ensure_finite_point};
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Default number of contour samples fed to the decomposition.
pub const DEFAULT_SAMPLE_COUNT: usize = 512;
/// Default number of retained phasors: indices `0, ±1, ..., ±23`.
pub const DEFAULT_PHASOR_COUNT: usize = 47;
/// Default number of tip positions kept in the trail.
pub const DEFAULT_TRAIL_CAPACITY: usize = 100;

/// Parameters for building and driving an [`EpicycleSession`](crate::EpicycleSession).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Points sampled along a path before decomposition.
    pub sample_count: usize,
    /// Coefficients retained from the decomposition.
    pub phasor_count: usize,
    /// Capacity of the tip trail.
    pub trail_capacity: usize,
    /// Revolutions per second of the index-1 phasor.
    pub speed_scale: f64,
    /// Maximum distance between a cubic segment and its flattened polyline.
    pub flatten_tolerance: f64,
    /// Offset applied to arm geometry at query time.
    pub origin: Point,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            phasor_count: DEFAULT_PHASOR_COUNT,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            speed_scale: 1.0,
            flatten_tolerance: crate::path::sampler::DEFAULT_FLATTEN_TOLERANCE,
            origin: Point::ZERO,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> EpicycleResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check counts, capacities and numeric fields.
    pub fn validate(&self) -> EpicycleResult<()> {
        if self.sample_count == 0 {
            return Err(EpicycleError::invalid_argument("sample_count must be > 0"));
        }
        if self.phasor_count == 0 {
            return Err(EpicycleError::invalid_argument("phasor_count must be > 0"));
        }
        if self.phasor_count > self.sample_count {
            return Err(EpicycleError::insufficient_samples(
                self.phasor_count,
                self.sample_count,
            ));
        }
        if self.trail_capacity == 0 {
            return Err(EpicycleError::invalid_argument(
                "trail_capacity must be > 0",
            ));
        }
        ensure_finite("speed_scale", self.speed_scale)?;
        if ensure_finite("flatten_tolerance", self.flatten_tolerance)? <= 0.0 {
            return Err(EpicycleError::invalid_argument(
                "flatten_tolerance must be > 0",
            ));
        }
        ensure_finite_point("origin", self.origin)?;
        Ok(())
    }
}
