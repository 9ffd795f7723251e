//! pf-models: vector-field library for phase-plane systems.
//!
//! Provides:
//! - Population and chemical oscillators (Lotka-Volterra, Brusselator, Oregonator)
//! - Mechanical and relaxation oscillators (van der Pol, Rayleigh, relay, forced pendulum)
//! - Neuron models (FitzHugh-Nagumo, Morris-Lecar)
//! - Normal forms (saddle-node, spiral sink, Hopf)
//!
//! Every field implements the `VectorField` trait and is a pure function of
//! state and its parameter struct. Fields are wrapped in immutable `Model`
//! records and looked up by name through a `ModelRegistry`.
//!
//! # Example
//!
//! ```
//! use pf_models::{ModelRegistry, PhaseState};
//!
//! let registry = ModelRegistry::builtin().unwrap();
//! let lotka = registry.lookup("lotka").unwrap();
//!
//! let rate = lotka.field().rhs(0.0, &PhaseState::planar(4.0, 4.0));
//! assert_eq!(rate.point.x, -8.0);
//! assert_eq!(rate.point.y, 4.0);
//! ```

pub mod error;
pub mod model;
pub mod neuron;
pub mod normal_form;
pub mod oscillator;
pub mod population;
pub mod registry;
pub mod tier;
pub mod traits;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use model::{Model, SamplingPolicy};
pub use neuron::{FitzHughNagumo, MorrisLecar};
pub use normal_form::{HopfNormal, SaddleNode, SpiralSink};
pub use oscillator::{ForcedPendulum, Rayleigh, Relay, VanDerPol};
pub use population::{Brusselator, LotkaVolterra, Oregonator};
pub use registry::{ModelRegistry, default_sampling_box};
pub use tier::{SPATIAL_MODELS, Tier};
pub use traits::{PhaseState, VectorField};
