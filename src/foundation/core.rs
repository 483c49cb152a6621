use crate::foundation::error::{EpicycleError, EpicycleResult};

pub use kurbo::{BezPath, PathEl, Point, Vec2};

/// Complex value used for samples and Fourier coefficients.
pub type Complex = num_complex::Complex64;

/// Reject NaN and infinities with an [`EpicycleError::InvalidArgument`] naming `what`.
pub(crate) fn ensure_finite(what: &str, v: f64) -> EpicycleResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EpicycleError::invalid_argument(format!(
            "{what} must be finite, got {v}"
        )))
    }
}

pub(crate) fn ensure_finite_point(what: &str, p: Point) -> EpicycleResult<Point> {
    ensure_finite(what, p.x)?;
    ensure_finite(what, p.y)?;
    Ok(p)
}

pub(crate) fn ensure_finite_complex(what: &str, c: Complex) -> EpicycleResult<Complex> {
    ensure_finite(what, c.re)?;
    ensure_finite(what, c.im)?;
    Ok(c)
}

/// Sample values carry `(x, y)` as `(re, im)`.
pub(crate) fn point_to_complex(p: Point) -> Complex {
    Complex::new(p.x, p.y)
}

pub(crate) fn complex_to_point(c: Complex) -> Point {
    Point::new(c.re, c.im)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
