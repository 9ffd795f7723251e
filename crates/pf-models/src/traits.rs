//! Core traits for vector-field models.

use core::fmt::Debug;

use pf_core::{Point, Real};

/// A phase-plane point plus the auxiliary drive phase.
///
/// The same type is used for states and for their time derivatives. Unforced
/// fields leave `phase` at zero in both roles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub point: Point,
    pub phase: Real,
}

impl PhaseState {
    pub fn new(point: Point, phase: Real) -> Self {
        Self { point, phase }
    }

    /// A state (or rate) with no drive phase.
    pub fn planar(x: Real, y: Real) -> Self {
        Self {
            point: Point::new(x, y),
            phase: 0.0,
        }
    }

    pub fn x(&self) -> Real {
        self.point.x
    }

    pub fn y(&self) -> Real {
        self.point.y
    }

    /// `self + scale * rate`, component-wise.
    pub fn offset(&self, rate: &PhaseState, scale: Real) -> PhaseState {
        PhaseState {
            point: self.point + rate.point * scale,
            phase: self.phase + rate.phase * scale,
        }
    }
}

/// Trait for autonomous or periodically forced planar vector fields.
///
/// Fields are deterministic functions of state and parameters with no hidden
/// mutable state, suitable for parallel evaluation across initial conditions.
pub trait VectorField: Send + Sync + Debug {
    /// Compute the time derivative of `state` at time `t`.
    ///
    /// The returned `phase` component is the rate of the drive phase; it is
    /// zero for unforced fields.
    fn rhs(&self, t: Real, state: &PhaseState) -> PhaseState;

    /// Whether the field threads a drive phase through `rhs`.
    ///
    /// Forced fields get their phase recorded alongside every sample.
    fn is_forced(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_advances_point_and_phase() {
        let s = PhaseState::new(Point::new(1.0, 2.0), 0.5);
        let rate = PhaseState::new(Point::new(10.0, -10.0), 1.0);
        let next = s.offset(&rate, 0.1);
        assert!((next.x() - 2.0).abs() < 1e-12);
        assert!((next.y() - 1.0).abs() < 1e-12);
        assert!((next.phase - 0.6).abs() < 1e-12);
    }
}
