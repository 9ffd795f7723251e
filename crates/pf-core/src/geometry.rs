//! Axis-aligned rectangles in phase space.

use core::fmt;

use crate::{PfError, PfResult, Point, Real};

/// Phase-plane axis, used for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Rectangle `[x_min, x_max] × [y_min, y_max]` in phase space.
///
/// The constructor rejects empty, inverted or non-finite ranges, so every
/// `BoundingBox` in circulation has strictly positive width and height and
/// can be divided by safely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    x_min: Real,
    x_max: Real,
    y_min: Real,
    y_max: Real,
}

impl BoundingBox {
    pub fn new(x_min: Real, x_max: Real, y_min: Real, y_max: Real) -> PfResult<Self> {
        check_range(Axis::X, x_min, x_max)?;
        check_range(Axis::Y, y_min, y_max)?;
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn x_min(&self) -> Real {
        self.x_min
    }

    pub fn x_max(&self) -> Real {
        self.x_max
    }

    pub fn y_min(&self) -> Real {
        self.y_min
    }

    pub fn y_max(&self) -> Real {
        self.y_max
    }

    pub fn width(&self) -> Real {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> Real {
        self.y_max - self.y_min
    }

    /// Closed-interval containment test.
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}

fn check_range(axis: Axis, min: Real, max: Real) -> PfResult<()> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Err(PfError::DegenerateBoundingBox { axis, min, max });
    }
    Ok(())
}
