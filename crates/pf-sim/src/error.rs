//! Error types for integration passes.

use pf_core::PfError;
use thiserror::Error;

/// Errors encountered while precomputing trajectories.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// A step left the finite range. Raised by integrators and consumed by
    /// the pass as a per-trajectory truncation; it never fails a pass.
    #[error("Non-finite state component {what}: {value}")]
    NonFiniteState { what: &'static str, value: f64 },

    /// The pass was abandoned because its cancel flag was raised.
    #[error("Integration pass cancelled")]
    Cancelled,

    #[error(transparent)]
    Core(PfError),
}

pub type SimResult<T> = Result<T, SimError>;

impl From<PfError> for SimError {
    fn from(e: PfError) -> Self {
        match e {
            PfError::NonFinite { what, value } => SimError::NonFiniteState { what, value },
            other => SimError::Core(other),
        }
    }
}
