//! Single integrated trajectories.

use pf_core::{Point, Real};

/// Why a trajectory stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// All requested samples were stored.
    Completed,
    /// The sample at index `step` would have been non-finite.
    Truncated { step: usize },
}

/// Ordered samples produced from one initial condition.
///
/// Never empty: the first sample is the initial condition itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Point>,
    phases: Option<Vec<Real>>,
    termination: Termination,
}

impl Trajectory {
    pub(crate) fn new(
        points: Vec<Point>,
        phases: Option<Vec<Real>>,
        termination: Termination,
    ) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert!(phases.as_ref().is_none_or(|p| p.len() == points.len()));
        Self {
            points,
            phases,
            termination,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn initial(&self) -> Point {
        self.points[0]
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Drive phase per sample, recorded for forced fields only.
    pub fn phases(&self) -> Option<&[Real]> {
        self.phases.as_deref()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self.termination, Termination::Truncated { .. })
    }
}
