use nalgebra::Vector2;

use crate::PfError;

/// Floating point type used throughout the engine.
pub type Real = f64;

/// A point in a two-variable phase plane.
pub type Point = Vector2<Real>;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// True when both coordinates of `p` are finite.
pub fn point_is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Reports the first non-finite coordinate of `p`, x before y.
pub fn ensure_finite_point(p: &Point) -> Result<Point, PfError> {
    ensure_finite(p.x, "x")?;
    ensure_finite(p.y, "y")?;
    Ok(*p)
}
