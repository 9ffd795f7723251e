//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_models::ModelError;
use pf_render::RenderError;
use pf_sim::SimError;

/// Application error type wrapping the library crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] SimError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Integration worker failed: {0}")]
    Worker(String),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn is_unknown_model(&self) -> bool {
        matches!(self, AppError::Model(ModelError::UnknownModel { .. }))
    }
}
