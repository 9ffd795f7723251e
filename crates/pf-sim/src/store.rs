//! Generation-tagged trajectory collections.

use pf_core::{BoundingBox, Generation, Real};

use crate::trajectory::Trajectory;

/// All trajectories from one integration pass of one model.
///
/// A store is built complete and never mutated. It carries the display box
/// of the model that produced it so readers never pair its samples with a
/// different model's mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryStore {
    generation: Generation,
    model: String,
    display_box: BoundingBox,
    nominal_len: usize,
    dt: Real,
    trajectories: Vec<Trajectory>,
}

/// Summary counts for logging and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub trajectories: usize,
    pub truncated: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub total_samples: usize,
}

impl TrajectoryStore {
    pub(crate) fn new(
        generation: Generation,
        model: String,
        display_box: BoundingBox,
        nominal_len: usize,
        dt: Real,
        trajectories: Vec<Trajectory>,
    ) -> Self {
        Self {
            generation,
            model,
            display_box,
            nominal_len,
            dt,
            trajectories,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Name of the model that produced this store.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn display_box(&self) -> BoundingBox {
        self.display_box
    }

    /// Requested samples per trajectory; truncated ones are shorter.
    pub fn nominal_len(&self) -> usize {
        self.nominal_len
    }

    pub fn dt(&self) -> Real {
        self.dt
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn get(&self, index: usize) -> Option<&Trajectory> {
        self.trajectories.get(index)
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        let lens = self.trajectories.iter().map(Trajectory::len);
        StoreStats {
            trajectories: self.trajectories.len(),
            truncated: self.trajectories.iter().filter(|t| t.is_truncated()).count(),
            min_len: lens.clone().min().unwrap_or(0),
            max_len: lens.clone().max().unwrap_or(0),
            total_samples: lens.sum(),
        }
    }

    /// True when both stores hold the same samples bit for bit, regardless
    /// of generation.
    pub fn same_samples(&self, other: &TrajectoryStore) -> bool {
        self.trajectories.len() == other.trajectories.len()
            && self
                .trajectories
                .iter()
                .zip(&other.trajectories)
                .all(|(a, b)| {
                    a.termination() == b.termination()
                        && a.len() == b.len()
                        && a.points().iter().zip(b.points()).all(|(p, q)| {
                            p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits()
                        })
                })
    }
}
