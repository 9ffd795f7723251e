//! Local bifurcation normal forms.

use pf_core::Real;

use crate::traits::{PhaseState, VectorField};

/// Saddle-node normal form written as a second-order system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaddleNode {
    pub mu: Real,
}

impl Default for SaddleNode {
    fn default() -> Self {
        Self { mu: 0.5 }
    }
}

impl VectorField for SaddleNode {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        PhaseState::planar(y, x * x - self.mu)
    }
}

/// Radially symmetric system spiralling onto the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpiralSink;

impl VectorField for SpiralSink {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        let r2 = x * x + y * y;
        PhaseState::planar(x - y - x * r2, x + y - y * r2)
    }
}

/// Supercritical Hopf normal form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HopfNormal {
    pub mu: Real,
}

impl Default for HopfNormal {
    fn default() -> Self {
        Self { mu: 10.0 }
    }
}

impl VectorField for HopfNormal {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        let r2 = x * x + y * y;
        PhaseState::planar(self.mu * x - y - x * r2, x + self.mu * y - y * r2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hopf_limit_cycle_is_invariant() {
        // On r² = μ the radial component vanishes.
        let h = HopfNormal::default();
        let r = h.mu.sqrt();
        let rate = h.rhs(0.0, &PhaseState::planar(r, 0.0));
        assert!(rate.x().abs() < 1e-12);
        assert!((rate.y() - r).abs() < 1e-12);
    }

    #[test]
    fn spiral_unit_circle_is_invariant() {
        let rate = SpiralSink.rhs(0.0, &PhaseState::planar(0.0, 1.0));
        assert!((rate.x() + 1.0).abs() < 1e-12);
        assert!(rate.y().abs() < 1e-12);
    }

    #[test]
    fn saddle_node_equilibria() {
        let s = SaddleNode::default();
        let x = s.mu.sqrt();
        for eq in [x, -x] {
            let rate = s.rhs(0.0, &PhaseState::planar(eq, 0.0));
            assert!(rate.x().abs() < 1e-12);
            assert!(rate.y().abs() < 1e-12);
        }
    }
}
