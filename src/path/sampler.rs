use crate::foundation::core::{Complex, Point, point_to_complex};
use crate::foundation::error::{EpicycleError, EpicycleResult};
use crate::path::model::Path;

/// Flattening tolerance used by [`sample`], in path units.
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug)]
struct Edge {
    from: Point,
    to: Point,
    /// Arc length at `to`, measured from the start of the path.
    end: f64,
    len: f64,
}

/// Sample `count` points at equal arc-length spacing along `path`.
///
/// See [`sample_with_tolerance`].
pub fn sample(path: &Path, count: usize) -> EpicycleResult<Vec<Complex>> {
    sample_with_tolerance(path, count, DEFAULT_FLATTEN_TOLERANCE)
}

/// Sample `count` points at equal arc-length spacing along `path`.
///
/// Subpath lengths are concatenated in segment order into one parametric domain `[0, L)`;
/// sample `i` sits at arc length `i * L / count`. A zero-length path yields `count` copies of
/// its start point.
#[tracing::instrument(skip(path))]
pub fn sample_with_tolerance(
    path: &Path,
    count: usize,
    tolerance: f64,
) -> EpicycleResult<Vec<Complex>> {
    if count == 0 {
        return Err(EpicycleError::invalid_argument("sample count must be > 0"));
    }

    let edges = build_edges(&path.flatten(tolerance)?);
    let total = edges.last().map_or(0.0, |e| e.end);
    tracing::debug!(edges = edges.len(), total_length = total, "flattened path");

    if edges.is_empty() || total <= 0.0 {
        return Ok(vec![point_to_complex(path.start_point()); count]);
    }

    let step = total / count as f64;
    let mut out = Vec::with_capacity(count);
    let mut cursor = 0usize;
    for i in 0..count {
        let s = i as f64 * step;
        while cursor + 1 < edges.len() && edges[cursor].end <= s {
            cursor += 1;
        }
        let e = edges[cursor];
        let t = ((s - (e.end - e.len)) / e.len).clamp(0.0, 1.0);
        out.push(point_to_complex(e.from.lerp(e.to, t)));
    }
    Ok(out)
}

fn build_edges(polylines: &[Vec<Point>]) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut acc = 0.0;
    for w in polylines.iter().flat_map(|poly| poly.windows(2)) {
        let len = w[0].distance(w[1]);
        if len <= 0.0 {
            continue;
        }
        acc += len;
        edges.push(Edge {
            from: w[0],
            to: w[1],
            end: acc,
            len,
        });
    }
    edges
}

#[cfg(test)]
#[path = "../../tests/unit/path/sampler.rs"]
mod tests;
