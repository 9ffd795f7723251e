//! Error types for model lookup and registration.

use pf_core::PfError;
use thiserror::Error;

use crate::tier::Tier;

/// Errors raised by the model registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown {tier} model: {name}")]
    UnknownModel { tier: Tier, name: String },

    #[error("Model already registered: {name}")]
    DuplicateModel { name: String },

    #[error("Unsupported dimension: {dimension}")]
    UnsupportedDimension { dimension: u8 },

    #[error(transparent)]
    Core(#[from] PfError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<ModelError> for PfError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Core(inner) => inner,
            ModelError::UnknownModel { .. } => PfError::InvalidArg {
                what: "unknown model",
            },
            ModelError::DuplicateModel { .. } => PfError::InvalidArg {
                what: "duplicate model",
            },
            ModelError::UnsupportedDimension { .. } => PfError::InvalidArg {
                what: "unsupported dimension",
            },
        }
    }
}
