//! Name-keyed registry of planar models.

use std::f64::consts::PI;
use std::sync::Arc;

use pf_core::{BoundingBox, PfResult};

use crate::error::{ModelError, ModelResult};
use crate::model::Model;
use crate::neuron::{FitzHughNagumo, MorrisLecar};
use crate::normal_form::{HopfNormal, SaddleNode, SpiralSink};
use crate::oscillator::{ForcedPendulum, Rayleigh, Relay, VanDerPol};
use crate::population::{Brusselator, LotkaVolterra, Oregonator};
use crate::tier::{SPATIAL_MODELS, Tier};

/// Sampling domain shared by every built-in model except `lotka`.
pub fn default_sampling_box() -> PfResult<BoundingBox> {
    BoundingBox::new(-12.0, 12.0, -10.0, 10.0)
}

/// Ordered, append-only collection of models.
///
/// Registration order is stable and is what `names()` reports.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: Vec<Arc<Model>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the twelve built-in planar systems.
    pub fn builtin() -> ModelResult<Self> {
        let shared = default_sampling_box()?;
        let mut registry = Self::new();

        let lotka = BoundingBox::new(0.1, 8.0, 0.1, 8.0)?;
        registry.register(Model::new("lotka", LotkaVolterra::default(), lotka))?;

        let wide = |m: Model| m.with_sampling_box(shared);
        let unit = BoundingBox::new(-6.0, 6.0, -4.0, 4.0)?;
        let narrow = BoundingBox::new(-4.0, 4.0, -3.0, 3.0)?;

        registry.register(wide(Model::new("vanDerPol", VanDerPol::default(), unit)))?;
        registry.register(wide(Model::new(
            "fitzHugh_Nagumo",
            FitzHughNagumo::default(),
            narrow,
        )))?;
        registry.register(wide(Model::new("spiral", SpiralSink, narrow)))?;
        registry.register(wide(Model::new(
            "saddle_node",
            SaddleNode::default(),
            BoundingBox::new(-13.0, 13.0, -10.0, 10.0)?,
        )))?;
        registry.register(wide(Model::new(
            "brusselator",
            Brusselator::default(),
            BoundingBox::new(-11.0, 11.0, -8.0, 8.0)?,
        )))?;
        registry.register(wide(Model::new(
            "damped_pendulum",
            ForcedPendulum::default(),
            BoundingBox::new(-PI, PI, -4.0, 4.0)?,
        )))?;
        registry.register(wide(Model::new("rayleigh", Rayleigh::default(), unit)))?;
        registry.register(wide(Model::new("hopf_normal", HopfNormal::default(), unit)))?;
        registry.register(wide(Model::new(
            "morris_lecar",
            MorrisLecar::default(),
            BoundingBox::new(-300.0, 300.0, -285.0, 285.0)?,
        )))?;
        registry.register(wide(Model::new("oregonator", Oregonator::default(), unit)))?;
        registry.register(wide(Model::new("relay", Relay::default(), unit)))?;

        Ok(registry)
    }

    /// Add a model. Names must be unique.
    pub fn register(&mut self, model: Model) -> ModelResult<Arc<Model>> {
        if self.models.iter().any(|m| m.name() == model.name()) {
            return Err(ModelError::DuplicateModel {
                name: model.name().to_string(),
            });
        }
        let model = Arc::new(model);
        self.models.push(Arc::clone(&model));
        Ok(model)
    }

    pub fn lookup(&self, name: &str) -> ModelResult<&Arc<Model>> {
        self.models
            .iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| ModelError::UnknownModel {
                tier: Tier::Planar,
                name: name.to_string(),
            })
    }

    /// Validate a three-variable selection against the spatial catalog.
    pub fn lookup_spatial(&self, name: &str) -> ModelResult<&'static str> {
        SPATIAL_MODELS
            .iter()
            .copied()
            .find(|m| *m == name)
            .ok_or_else(|| ModelError::UnknownModel {
                tier: Tier::Spatial,
                name: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(|m| m.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Model>> {
        self.models.iter()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
