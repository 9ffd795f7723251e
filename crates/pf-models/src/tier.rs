//! Dimensionality tiers.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Names accepted by the three-variable tier. Selection is stored only;
/// nothing is integrated for this tier.
pub const SPATIAL_MODELS: &[&str] = &["lorenz"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Two state variables, drawn as streaks on a canvas.
    #[default]
    Planar,
    /// Three state variables.
    Spatial,
}

impl Tier {
    pub fn dimension(self) -> u8 {
        match self {
            Tier::Planar => 2,
            Tier::Spatial => 3,
        }
    }

    pub fn from_dimension(dimension: u8) -> ModelResult<Self> {
        match dimension {
            2 => Ok(Tier::Planar),
            3 => Ok(Tier::Spatial),
            other => Err(ModelError::UnsupportedDimension { dimension: other }),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.dimension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_round_trip() {
        for tier in [Tier::Planar, Tier::Spatial] {
            assert_eq!(Tier::from_dimension(tier.dimension()).unwrap(), tier);
        }
        assert!(matches!(
            Tier::from_dimension(1),
            Err(ModelError::UnsupportedDimension { dimension: 1 })
        ));
    }
}
