//! Population and chemical-kinetics oscillators.

use pf_core::Real;

use crate::traits::{PhaseState, VectorField};

/// Lotka-Volterra predator-prey dynamics.
///
/// `dx = αx - βxy`, `dy = -γy + δxy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotkaVolterra {
    pub alpha: Real,
    pub beta: Real,
    pub gamma: Real,
    pub delta: Real,
}

impl Default for LotkaVolterra {
    fn default() -> Self {
        Self {
            alpha: 2.0,
            beta: 1.0,
            gamma: 1.0,
            delta: 0.5,
        }
    }
}

impl VectorField for LotkaVolterra {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        PhaseState::planar(
            self.alpha * x - self.beta * x * y,
            -self.gamma * y + self.delta * x * y,
        )
    }
}

/// Brusselator autocatalytic reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brusselator {
    pub a: Real,
    pub b: Real,
}

impl Default for Brusselator {
    fn default() -> Self {
        Self { a: 1.0, b: 3.0 }
    }
}

impl VectorField for Brusselator {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        let x2y = x * x * y;
        PhaseState::planar(self.a - (self.b + 1.0) * x + x2y, self.b * x - x2y)
    }
}

/// Two-variable Oregonator (Belousov-Zhabotinsky reduction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oregonator {
    pub q: Real,
    pub f: Real,
    pub s: Real,
}

impl Default for Oregonator {
    fn default() -> Self {
        Self {
            q: 0.002,
            f: 1.2,
            s: 77.27,
        }
    }
}

impl VectorField for Oregonator {
    fn rhs(&self, _t: Real, st: &PhaseState) -> PhaseState {
        let (x, y) = (st.x(), st.y());
        PhaseState::planar(
            self.s * (self.q * y - x * y + x * (1.0 - x)),
            (1.0 / self.s) * (-self.q * y - x * y + self.f),
        )
    }
}
