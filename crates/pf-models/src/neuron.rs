//! Conductance-style neuron models.

use pf_core::Real;

use crate::traits::{PhaseState, VectorField};

/// FitzHugh-Nagumo excitable membrane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitzHughNagumo {
    pub current: Real,
    pub resistance: Real,
    pub a: Real,
    pub b: Real,
    pub epsilon: Real,
}

impl Default for FitzHughNagumo {
    fn default() -> Self {
        Self {
            current: 0.5,
            resistance: 0.1,
            a: 0.7,
            b: 0.8,
            epsilon: 0.8,
        }
    }
}

impl VectorField for FitzHughNagumo {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (v, w) = (s.x(), s.y());
        PhaseState::planar(
            v - v * v * v / 3.0 - w + self.resistance * self.current,
            self.epsilon * (v + self.a - self.b * w),
        )
    }
}

/// Morris-Lecar barnacle muscle fiber model.
///
/// The recovery time scale is `1 / cosh(((V - V3) / 2) · V4)`; large
/// voltages overflow `cosh` and the resulting non-finite rate truncates the
/// trajectory during integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorrisLecar {
    /// Membrane capacitance. Not used by the rate equations.
    pub capacitance: Real,
    pub g_ca: Real,
    pub g_k: Real,
    pub g_l: Real,
    pub v_ca: Real,
    pub v_k: Real,
    pub v_l: Real,
    pub v1: Real,
    pub v2: Real,
    pub v3: Real,
    pub v4: Real,
    pub phi: Real,
    pub current: Real,
}

impl Default for MorrisLecar {
    fn default() -> Self {
        Self {
            capacitance: 20.0,
            g_ca: 4.4,
            g_k: 8.0,
            g_l: 2.0,
            v_ca: 120.0,
            v_k: -84.0,
            v_l: -60.0,
            v1: -1.2,
            v2: 18.0,
            v3: 12.0,
            v4: 17.4,
            phi: 0.04,
            current: 95.0,
        }
    }
}

impl MorrisLecar {
    fn m_inf(&self, v: Real) -> Real {
        0.5 * (1.0 + ((v - self.v1) / self.v2).tanh())
    }

    fn w_inf(&self, v: Real) -> Real {
        0.5 * (1.0 + ((v - self.v3) / self.v4).tanh())
    }

    fn tau(&self, v: Real) -> Real {
        1.0 / ((v - self.v3) / 2.0 * self.v4).cosh()
    }
}

impl VectorField for MorrisLecar {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (v, w) = (s.x(), s.y());
        let dv = self.current
            - self.g_ca * self.m_inf(v) * (v - self.v_ca)
            - self.g_k * w * (v - self.v_k)
            - self.g_l * (v - self.v_l);
        let dw = self.phi * (self.w_inf(v) - w) / self.tau(v);
        PhaseState::planar(dv, dw)
    }
}
