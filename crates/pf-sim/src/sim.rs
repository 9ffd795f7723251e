//! Integration passes over a lattice of initial conditions.

use std::sync::atomic::{AtomicBool, Ordering};

use pf_core::timing::Timer;
use pf_core::{Generation, Point, Real};
use pf_models::{Model, PhaseState, SamplingPolicy, VectorField};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SimError, SimResult};
use crate::grid::initial_conditions;
use crate::integrator::{ForwardEuler, Integrator};
use crate::store::TrajectoryStore;
use crate::trajectory::{Termination, Trajectory};

/// Options for an integration pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationOptions {
    /// Fixed time step
    pub dt: Real,
    /// Samples per trajectory, initial condition included
    pub step_count: usize,
    /// Lattice resolution per axis
    pub grid_size: usize,
    /// Where initial conditions are drawn from
    pub sampling: SamplingPolicy,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            step_count: 7500,
            grid_size: 20,
            sampling: SamplingPolicy::default(),
        }
    }
}

impl IntegrationOptions {
    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidArg {
                what: "dt must be positive and finite",
            });
        }
        if self.step_count == 0 {
            return Err(SimError::InvalidArg {
                what: "step_count must be positive",
            });
        }
        if self.grid_size == 0 {
            return Err(SimError::InvalidArg {
                what: "grid_size must be positive",
            });
        }
        Ok(())
    }
}

/// Steps between two polls of the cancel flag inside one trajectory.
const CANCEL_POLL_INTERVAL: usize = 1024;

/// Integrate every lattice point of `model` into a new store.
///
/// Trajectories are computed in parallel and stored in lattice order. A
/// trajectory that leaves the finite range is truncated; the pass itself
/// only fails on invalid options.
pub fn integrate(
    model: &Model,
    opts: &IntegrationOptions,
    generation: Generation,
) -> SimResult<TrajectoryStore> {
    integrate_cancellable(model, opts, generation, &AtomicBool::new(false))
}

/// Like `integrate`, but abandons the pass with `SimError::Cancelled` once
/// `cancel` is raised. The flag is polled before each lattice point and
/// every `CANCEL_POLL_INTERVAL` steps within a trajectory.
pub fn integrate_cancellable(
    model: &Model,
    opts: &IntegrationOptions,
    generation: Generation,
    cancel: &AtomicBool,
) -> SimResult<TrajectoryStore> {
    opts.validate()?;
    let timer = Timer::start("integrate");

    let sampling_box = model.sampling_box(opts.sampling);
    let initials = initial_conditions(&sampling_box, opts.grid_size)?;
    let field = model.field();

    let trajectories = initials
        .par_iter()
        .map(|p| run_trajectory(&ForwardEuler, field, *p, opts, cancel))
        .collect::<SimResult<Vec<_>>>()
        .inspect_err(|e| {
            if matches!(e, SimError::Cancelled) {
                debug!(model = model.name(), %generation, "integration pass cancelled");
            }
        })?;

    let store = TrajectoryStore::new(
        generation,
        model.name().to_string(),
        model.display_box(),
        opts.step_count,
        opts.dt,
        trajectories,
    );

    let stats = store.stats();
    if stats.truncated > 0 {
        debug!(
            model = model.name(),
            truncated = stats.truncated,
            shortest = stats.min_len,
            "trajectories left the finite range"
        );
    }
    info!(
        model = model.name(),
        %generation,
        trajectories = stats.trajectories,
        samples = stats.total_samples,
        elapsed_s = timer.elapsed_s(),
        "{} pass complete",
        timer.label()
    );

    Ok(store)
}

/// Integrate a single initial condition.
pub fn integrate_one(
    field: &dyn VectorField,
    initial: Point,
    opts: &IntegrationOptions,
) -> SimResult<Trajectory> {
    opts.validate()?;
    run_trajectory(&ForwardEuler, field, initial, opts, &AtomicBool::new(false))
}

fn run_trajectory<I: Integrator>(
    integrator: &I,
    field: &dyn VectorField,
    initial: Point,
    opts: &IntegrationOptions,
    cancel: &AtomicBool,
) -> SimResult<Trajectory> {
    let steps = opts.step_count;
    let mut points = Vec::with_capacity(steps);
    let mut phases = field.is_forced().then(|| Vec::with_capacity(steps));
    let mut termination = Termination::Completed;
    let mut x = PhaseState::new(initial, 0.0);

    for step in 0..steps {
        if step % CANCEL_POLL_INTERVAL == 0 && cancel.load(Ordering::Relaxed) {
            return Err(SimError::Cancelled);
        }
        points.push(x.point);
        if let Some(p) = phases.as_mut() {
            p.push(x.phase);
        }
        if step + 1 == steps {
            break;
        }
        let t = step as Real * opts.dt;
        match integrator.step(field, t, &x, opts.dt) {
            Ok(next) => x = next,
            Err(SimError::NonFiniteState { .. }) => {
                termination = Termination::Truncated { step: step + 1 };
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Trajectory::new(points, phases, termination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::BoundingBox;
    use pf_models::{LotkaVolterra, ModelRegistry};
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    /// Spiral sink that counts its evaluations.
    #[derive(Debug)]
    struct Counting(Arc<AtomicUsize>);

    impl VectorField for Counting {
        fn rhs(&self, _t: Real, s: &PhaseState) -> PhaseState {
            self.0.fetch_add(1, Ordering::Relaxed);
            PhaseState::planar(-s.y() - 0.1 * s.x(), s.x() - 0.1 * s.y())
        }
    }

    #[test]
    fn options_defaults() {
        let opts = IntegrationOptions::default();
        assert_eq!(opts.dt, 1e-3);
        assert_eq!(opts.step_count, 7500);
        assert_eq!(opts.grid_size, 20);
        assert_eq!(opts.sampling, SamplingPolicy::Inherited);
    }

    #[test]
    fn options_invalid() {
        let bad = [
            IntegrationOptions {
                dt: 0.0,
                ..Default::default()
            },
            IntegrationOptions {
                dt: f64::NAN,
                ..Default::default()
            },
            IntegrationOptions {
                step_count: 0,
                ..Default::default()
            },
            IntegrationOptions {
                grid_size: 0,
                ..Default::default()
            },
        ];
        for opts in bad {
            assert!(matches!(opts.validate(), Err(SimError::InvalidArg { .. })));
        }
    }

    #[test]
    fn first_sample_is_initial_condition() {
        let opts = IntegrationOptions {
            step_count: 3,
            ..Default::default()
        };
        let traj = integrate_one(&LotkaVolterra::default(), Point::new(4.0, 4.0), &opts).unwrap();
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.initial(), Point::new(4.0, 4.0));
        assert!((traj.points()[1].x - 3.992).abs() < 1e-12);
        assert!((traj.points()[1].y - 4.004).abs() < 1e-12);
        assert_eq!(traj.termination(), Termination::Completed);
        assert!(traj.phases().is_none());
    }

    #[test]
    fn single_step_stores_only_initial() {
        let opts = IntegrationOptions {
            step_count: 1,
            ..Default::default()
        };
        let traj = integrate_one(&LotkaVolterra::default(), Point::new(1.0, 1.0), &opts).unwrap();
        assert_eq!(traj.points(), &[Point::new(1.0, 1.0)]);
    }

    #[test]
    fn pass_keeps_lattice_order() {
        let registry = ModelRegistry::builtin().unwrap();
        let model = registry.lookup("lotka").unwrap();
        let opts = IntegrationOptions {
            step_count: 10,
            grid_size: 3,
            ..Default::default()
        };
        let store = integrate(model, &opts, Generation::FIRST).unwrap();
        let lattice = initial_conditions(&model.display_box(), 3).unwrap();
        let starts: Vec<Point> = store.trajectories().iter().map(|t| t.initial()).collect();
        assert_eq!(starts, lattice);
        assert_eq!(store.model(), "lotka");
        assert_eq!(store.generation(), Generation::FIRST);
    }

    #[test]
    fn raised_flag_cancels_before_any_step() {
        let calls = Arc::new(AtomicUsize::new(0));
        let bbox = BoundingBox::new(-1.0, 1.0, -1.0, 1.0).unwrap();
        let model = Model::new("counting", Counting(Arc::clone(&calls)), bbox);
        let opts = IntegrationOptions {
            grid_size: 4,
            ..Default::default()
        };
        let cancel = AtomicBool::new(true);
        let err = integrate_cancellable(&model, &opts, Generation::FIRST, &cancel).unwrap_err();
        assert_eq!(err, SimError::Cancelled);
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn lowered_flag_matches_plain_pass() {
        let registry = ModelRegistry::builtin().unwrap();
        let model = registry.lookup("vanDerPol").unwrap();
        let opts = IntegrationOptions {
            step_count: 2000,
            grid_size: 3,
            ..Default::default()
        };
        let cancel = AtomicBool::new(false);
        let a = integrate_cancellable(model, &opts, Generation::FIRST, &cancel).unwrap();
        let b = integrate(model, &opts, Generation::FIRST).unwrap();
        assert!(a.same_samples(&b));
    }
}
