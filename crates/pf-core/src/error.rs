use thiserror::Error;

use crate::geometry::Axis;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Degenerate bounding box: {axis} range [{min}, {max}] has no extent")]
    DegenerateBoundingBox { axis: Axis, min: f64, max: f64 },
}
