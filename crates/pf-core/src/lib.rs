//! pf-core: numeric foundation for phaseflow.
//!
//! Contains:
//! - numeric (Real, Point, finiteness helpers)
//! - geometry (validated phase-space bounding boxes)
//! - ids (store generations)
//! - timing (wall-clock timers for integration passes)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;
pub mod timing;

pub use error::{PfError, PfResult};
pub use geometry::{Axis, BoundingBox};
pub use ids::{Generation, GenerationCounter};
pub use numeric::*;
