//! Initial-condition lattice.

use pf_core::{BoundingBox, Point, Real};

use crate::error::{SimError, SimResult};

/// `n × n` lattice of initial conditions in `bbox`, x-major.
///
/// Points sit at `min + k·(max - min)/n` for `k ∈ [0, n)`, so the lower
/// edges are sampled and the upper edges are not.
pub fn initial_conditions(bbox: &BoundingBox, n: usize) -> SimResult<Vec<Point>> {
    if n == 0 {
        return Err(SimError::InvalidArg {
            what: "grid_size must be positive",
        });
    }
    let dx = bbox.width() / n as Real;
    let dy = bbox.height() / n as Real;

    let mut points = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            points.push(Point::new(
                bbox.x_min() + i as Real * dx,
                bbox.y_min() + j as Real * dy,
            ));
        }
    }
    Ok(points)
}
