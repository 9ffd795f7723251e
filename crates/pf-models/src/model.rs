//! Immutable model records.

use std::sync::Arc;

use pf_core::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::traits::VectorField;

/// Which box initial conditions are sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPolicy {
    /// Each model's registered sampling box. Only `lotka` samples its own
    /// display box; every other model shares the wide default box.
    #[default]
    Inherited,
    /// Sample every model over its display box.
    DisplayBox,
}

/// A named vector field with its display and sampling domains.
#[derive(Debug, Clone)]
pub struct Model {
    name: String,
    field: Arc<dyn VectorField>,
    display_box: BoundingBox,
    sampling_box: BoundingBox,
}

impl Model {
    /// Create a model that samples over its display box.
    pub fn new(
        name: impl Into<String>,
        field: impl VectorField + 'static,
        display_box: BoundingBox,
    ) -> Self {
        Self {
            name: name.into(),
            field: Arc::new(field),
            display_box,
            sampling_box: display_box,
        }
    }

    pub fn with_sampling_box(mut self, sampling_box: BoundingBox) -> Self {
        self.sampling_box = sampling_box;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &dyn VectorField {
        self.field.as_ref()
    }

    /// Box mapped onto the canvas.
    pub fn display_box(&self) -> BoundingBox {
        self.display_box
    }

    /// Box initial conditions are drawn from under `policy`.
    pub fn sampling_box(&self, policy: SamplingPolicy) -> BoundingBox {
        match policy {
            SamplingPolicy::Inherited => self.sampling_box,
            SamplingPolicy::DisplayBox => self.display_box,
        }
    }
}
