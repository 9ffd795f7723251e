//! Fixed-step time integrators.

use pf_core::{Real, ensure_finite_point};
use pf_models::{PhaseState, VectorField};

use crate::error::SimResult;

/// Trait for time integrators.
pub trait Integrator: Sync {
    /// Advance `x` by one step of size `dt`.
    ///
    /// Returns `SimError::NonFiniteState` if the new planar state has a
    /// non-finite component.
    fn step(
        &self,
        field: &dyn VectorField,
        t: Real,
        x: &PhaseState,
        dt: Real,
    ) -> SimResult<PhaseState>;
}

/// Forward Euler (explicit, 1st order).
/// `x_new = x + dt * rhs(t, x)`; the drive phase advances with the same rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step(
        &self,
        field: &dyn VectorField,
        t: Real,
        x: &PhaseState,
        dt: Real,
    ) -> SimResult<PhaseState> {
        let xdot = field.rhs(t, x);
        let next = x.offset(&xdot, dt);
        ensure_finite_point(&next.point)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimError;
    use pf_models::{ForcedPendulum, LotkaVolterra};

    #[test]
    fn lotka_first_step() {
        let next = ForwardEuler
            .step(&LotkaVolterra::default(), 0.0, &PhaseState::planar(4.0, 4.0), 0.001)
            .unwrap();
        assert!((next.x() - 3.992).abs() < 1e-12);
        assert!((next.y() - 4.004).abs() < 1e-12);
        assert_eq!(next.phase, 0.0);
    }

    #[test]
    fn pendulum_phase_advances() {
        let p = ForcedPendulum::default();
        let next = ForwardEuler
            .step(&p, 0.0, &PhaseState::planar(0.0, 0.0), 0.001)
            .unwrap();
        assert!((next.phase - 0.001).abs() < 1e-15);
    }

    #[derive(Debug)]
    struct Blowup;

    impl VectorField for Blowup {
        fn rhs(&self, _t: Real, _s: &PhaseState) -> PhaseState {
            PhaseState::planar(Real::INFINITY, 0.0)
        }
    }

    #[test]
    fn non_finite_step_is_signalled() {
        let err = ForwardEuler
            .step(&Blowup, 0.0, &PhaseState::planar(0.0, 0.0), 0.1)
            .unwrap_err();
        assert!(matches!(err, SimError::NonFiniteState { what: "x", .. }));
    }
}
