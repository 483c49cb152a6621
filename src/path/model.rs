use crate::foundation::core::{BezPath, PathEl, Point, ensure_finite_point};
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// One command of a planar contour.
///
/// `Close` connects the current point back to the most recent `MoveTo`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Segment {
    /// Start a new subpath at the given point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic Bézier from the current point through two control points.
    CurveTo {
        /// First control point.
        c1: Point,
        /// Second control point.
        c2: Point,
        /// End point.
        end: Point,
    },
    /// Close the current subpath.
    Close,
}

/// Immutable, validated sequence of [`Segment`]s whose first element is always `MoveTo`.
///
/// Disjoint subpaths are traversed back to back by the sampler; callers should close each
/// subpath or expect a jump between them in the reconstructed curve.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Start building a path.
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    /// Validate and collect a segment list.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> EpicycleResult<Self> {
        segments
            .into_iter()
            .try_fold(PathBuilder::new(), |b, seg| b.segment(seg))?
            .build()
    }

    /// Segments in construction order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Point of the leading `MoveTo`.
    pub fn start_point(&self) -> Point {
        match self.segments.first() {
            Some(Segment::MoveTo(p)) => *p,
            _ => Point::ZERO,
        }
    }

    /// Convert to a `kurbo` path.
    ///
    /// A drawing command following `Close` without its own `MoveTo` gets an explicit `MoveTo`
    /// at the subpath start.
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let mut start = Point::ZERO;
        let mut after_close = false;
        for seg in &self.segments {
            if after_close && !matches!(seg, Segment::MoveTo(_) | Segment::Close) {
                bez.move_to(start);
            }
            after_close = false;
            match *seg {
                Segment::MoveTo(p) => {
                    start = p;
                    bez.move_to(p);
                }
                Segment::LineTo(p) => bez.line_to(p),
                Segment::CurveTo { c1, c2, end } => bez.curve_to(c1, c2, end),
                Segment::Close => {
                    bez.close_path();
                    after_close = true;
                }
            }
        }
        bez
    }

    /// Flatten into one polyline per subpath.
    ///
    /// Lines and closing edges are copied exactly; cubic segments are subdivided until the
    /// polyline is within `tolerance` of the curve.
    pub fn flatten(&self, tolerance: f64) -> EpicycleResult<Vec<Vec<Point>>> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(EpicycleError::invalid_argument(format!(
                "flatten tolerance must be finite and > 0, got {tolerance}"
            )));
        }

        let mut polylines: Vec<Vec<Point>> = Vec::new();
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;
        let mut after_close = false;

        for seg in &self.segments {
            if after_close && !matches!(seg, Segment::MoveTo(_) | Segment::Close) {
                polylines.push(vec![start]);
            }
            after_close = false;
            match *seg {
                Segment::MoveTo(p) => {
                    polylines.push(vec![p]);
                    start = p;
                    current = p;
                }
                Segment::LineTo(p) => {
                    push_point(&mut polylines, p);
                    current = p;
                }
                Segment::CurveTo { c1, c2, end } => {
                    let cubic = [PathEl::MoveTo(current), PathEl::CurveTo(c1, c2, end)];
                    kurbo::flatten(cubic, tolerance, |el| {
                        if let PathEl::LineTo(p) = el {
                            push_point(&mut polylines, p);
                        }
                    });
                    if polylines.last().and_then(|poly| poly.last()) != Some(&end) {
                        push_point(&mut polylines, end);
                    }
                    current = end;
                }
                Segment::Close => {
                    push_point(&mut polylines, start);
                    current = start;
                    after_close = true;
                }
            }
        }

        Ok(polylines)
    }

    /// Total contour length, summed over subpaths (jumps between subpaths excluded).
    pub fn length(&self, tolerance: f64) -> EpicycleResult<f64> {
        Ok(self
            .flatten(tolerance)?
            .iter()
            .flat_map(|poly| poly.windows(2))
            .map(|w| w[0].distance(w[1]))
            .sum())
    }
}

fn push_point(polylines: &mut [Vec<Point>], p: Point) {
    if let Some(poly) = polylines.last_mut() {
        poly.push(p);
    }
}

impl TryFrom<&BezPath> for Path {
    type Error = EpicycleError;

    fn try_from(bez: &BezPath) -> EpicycleResult<Self> {
        let mut b = PathBuilder::new();
        for el in bez.elements() {
            b = match *el {
                PathEl::MoveTo(p) => b.move_to(p)?,
                PathEl::LineTo(p) => b.line_to(p)?,
                PathEl::QuadTo(q, end) => {
                    // Degree elevation is exact for quadratics.
                    let p0 = b.current_point()?;
                    let c1 = p0 + (q - p0) * (2.0 / 3.0);
                    let c2 = end + (q - end) * (2.0 / 3.0);
                    b.curve_to(c1, c2, end)?
                }
                PathEl::CurveTo(c1, c2, end) => b.curve_to(c1, c2, end)?,
                PathEl::ClosePath => b.close()?,
            };
        }
        b.build()
    }
}

/// Builder for [`Path`] values.
///
/// Every drawing command requires a preceding `move_to`.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
    subpath_start: Option<Point>,
    current: Point,
    closed: bool,
}

impl PathBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new subpath at `p`.
    pub fn move_to(mut self, p: impl Into<Point>) -> EpicycleResult<Self> {
        let p = ensure_finite_point("move_to point", p.into())?;
        self.segments.push(Segment::MoveTo(p));
        self.subpath_start = Some(p);
        self.current = p;
        self.closed = false;
        Ok(self)
    }

    /// Straight line from the current point to `p`.
    pub fn line_to(mut self, p: impl Into<Point>) -> EpicycleResult<Self> {
        self.require_subpath("line_to")?;
        let p = ensure_finite_point("line_to point", p.into())?;
        self.segments.push(Segment::LineTo(p));
        self.current = p;
        self.closed = false;
        Ok(self)
    }

    /// Cubic Bézier from the current point to `end`.
    pub fn curve_to(
        mut self,
        c1: impl Into<Point>,
        c2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> EpicycleResult<Self> {
        self.require_subpath("curve_to")?;
        let c1 = ensure_finite_point("curve_to control point", c1.into())?;
        let c2 = ensure_finite_point("curve_to control point", c2.into())?;
        let end = ensure_finite_point("curve_to end point", end.into())?;
        self.segments.push(Segment::CurveTo { c1, c2, end });
        self.current = end;
        self.closed = false;
        Ok(self)
    }

    /// Close the current subpath. Closing an already closed subpath is a no-op.
    pub fn close(mut self) -> EpicycleResult<Self> {
        let start = self.require_subpath("close")?;
        if !self.closed {
            self.segments.push(Segment::Close);
            self.current = start;
            self.closed = true;
        }
        Ok(self)
    }

    /// Append any segment, dispatching to the matching command.
    pub fn segment(self, seg: Segment) -> EpicycleResult<Self> {
        match seg {
            Segment::MoveTo(p) => self.move_to(p),
            Segment::LineTo(p) => self.line_to(p),
            Segment::CurveTo { c1, c2, end } => self.curve_to(c1, c2, end),
            Segment::Close => self.close(),
        }
    }

    /// Finish the path.
    pub fn build(self) -> EpicycleResult<Path> {
        if self.segments.is_empty() {
            return Err(EpicycleError::invalid_path_state(
                "path has no segments (expected a leading move_to)",
            ));
        }
        Ok(Path {
            segments: self.segments,
        })
    }

    fn current_point(&self) -> EpicycleResult<Point> {
        self.require_subpath("curve")?;
        Ok(self.current)
    }

    fn require_subpath(&self, op: &str) -> EpicycleResult<Point> {
        self.subpath_start.ok_or_else(|| {
            EpicycleError::invalid_path_state(format!("{op} requires a preceding move_to"))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
