//! Shared application layer for phaseflow.
//!
//! This crate ties the model registry, integrator and scheduler together
//! behind one explicit `SimulationContext`, and provides configuration
//! loading plus an optional background integration worker.

pub mod config;
pub mod context;
pub mod error;
pub mod worker;

// Re-export key types for convenience
pub use config::{SimConfig, load_config};
pub use context::{FrameReport, SimulationContext};
pub use error::{AppError, AppResult};
pub use worker::{IntegrationWorker, WorkerMessage};
