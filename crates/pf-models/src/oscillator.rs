//! Mechanical and relaxation oscillators.

use pf_core::Real;

use crate::traits::{PhaseState, VectorField};

/// Van der Pol oscillator, `x'' - μ(1 - x²)x' + x = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanDerPol {
    pub mu: Real,
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self { mu: 0.5 }
    }
}

impl VectorField for VanDerPol {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        PhaseState::planar(y, self.mu * (1.0 - x * x) * y - x)
    }
}

/// Rayleigh oscillator: damping depends on velocity rather than position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    pub mu: Real,
}

impl Default for Rayleigh {
    fn default() -> Self {
        Self { mu: 0.1 }
    }
}

impl VectorField for Rayleigh {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        PhaseState::planar(y, self.mu * (1.0 - y * y) * y - x)
    }
}

/// Piecewise-linear relay oscillator.
///
/// `dy = -k·x + F` for `x > 0`, `dy = -k·x - F` otherwise. The switch at
/// `x = 0` is a hard discontinuity and is evaluated as such.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relay {
    pub stiffness: Real,
    pub force: Real,
}

impl Default for Relay {
    fn default() -> Self {
        Self {
            stiffness: 2.0,
            force: 5.0,
        }
    }
}

impl VectorField for Relay {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (x, y) = (s.x(), s.y());
        let dy = if x > 0.0 {
            -self.stiffness * x + self.force
        } else {
            -self.stiffness * x - self.force
        };
        PhaseState::planar(y, dy)
    }
}

/// Damped pendulum driven by `A·cos(φ)`, with the drive phase `φ` advancing
/// at `ω_d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedPendulum {
    pub amplitude: Real,
    pub damping: Real,
    pub drive_frequency: Real,
}

impl Default for ForcedPendulum {
    fn default() -> Self {
        Self {
            amplitude: 1.2,
            damping: 0.25,
            drive_frequency: 1.0,
        }
    }
}

impl VectorField for ForcedPendulum {
    fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
        let (theta, omega) = (s.x(), s.y());
        let domega = -self.damping * omega - theta.sin() + self.amplitude * s.phase.cos();
        PhaseState {
            point: pf_core::Point::new(omega, domega),
            phase: self.drive_frequency,
        }
    }

    fn is_forced(&self) -> bool {
        true
    }
}
