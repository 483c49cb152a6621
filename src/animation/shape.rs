use crate::animation::phasor::{Animator, line_segment_path, rectangle_path};
use crate::config::SessionConfig;
use crate::foundation::core::Point;
use crate::foundation::error::EpicycleResult;
use crate::fourier::decompose::decompose;
use crate::path::model::{Path, Segment};
use crate::path::sampler::sample_with_tolerance;

/// The closed set of shape kinds an animation can be built from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle centered on the origin.
    Rectangle {
        /// Extent along x.
        width: f64,
        /// Extent along y.
        height: f64,
    },
    /// Out-and-back loop over a line segment.
    LineSegment {
        /// First endpoint.
        start: Point,
        /// Second endpoint.
        end: Point,
    },
    /// Arbitrary contour.
    Path {
        /// Segments, validated on build.
        segments: Vec<Segment>,
    },
    /// Pseudo-random demo coefficients.
    Synthetic {
        /// Number of phasors.
        count: usize,
        /// Generator seed.
        #[serde(default)]
        seed: u64,
    },
    /// Canned `radius/|k|` coefficient set.
    Harmonic {
        /// Number of phasors.
        count: usize,
        /// Radius of the index-1 phasor.
        radius: f64,
    },
}

impl Shape {
    /// Wrap an already validated path.
    pub fn from_path(path: &Path) -> Self {
        Self::Path {
            segments: path.segments().to_vec(),
        }
    }
}

impl Animator {
    /// Build an animator for `shape`, sampling and decomposing path-backed kinds with the
    /// counts and tolerance from `config`.
    #[tracing::instrument(skip(shape, config), fields(phasors = config.phasor_count))]
    pub fn from_shape(shape: &Shape, config: &SessionConfig) -> EpicycleResult<Self> {
        config.validate()?;
        let path = match shape {
            Shape::Synthetic { count, seed } => return Self::synthetic(*count, *seed),
            Shape::Harmonic { count, radius } => return Self::harmonic(*count, *radius),
            Shape::Rectangle { width, height } => rectangle_path(*width, *height)?,
            Shape::LineSegment { start, end } => line_segment_path(*start, *end)?,
            Shape::Path { segments } => Path::from_segments(segments.iter().copied())?,
        };
        let samples = sample_with_tolerance(&path, config.sample_count, config.flatten_tolerance)?;
        Self::from_coefficients(decompose(&samples, config.phasor_count)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
