//! Trajectory precomputation for phase-plane models.
//!
//! Provides:
//! - Fixed-step forward Euler integrator
//! - Initial-condition lattice over a sampling box
//! - Immutable, generation-tagged trajectory stores
//! - Data-parallel integration pass over the whole lattice

pub mod error;
pub mod grid;
pub mod integrator;
pub mod sim;
pub mod store;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use grid::initial_conditions;
pub use integrator::{ForwardEuler, Integrator};
pub use sim::{IntegrationOptions, integrate, integrate_cancellable, integrate_one};
pub use store::{StoreStats, TrajectoryStore};
pub use trajectory::{Termination, Trajectory};
