//! Simulation configuration.

use std::path::Path;

use pf_models::Tier;
use pf_render::{AnimationOptions, CanvasSize};
use pf_sim::IntegrationOptions;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Everything a `SimulationContext` needs besides the registry and sink.
///
/// Every field has a default, so partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Planar model integrated at startup
    pub initial_model: String,
    pub tier: Tier,
    pub integration: IntegrationOptions,
    pub animation: AnimationOptions,
    pub canvas: CanvasSize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_model: "lotka".to_string(),
            tier: Tier::Planar,
            integration: IntegrationOptions::default(),
            animation: AnimationOptions::default(),
            canvas: CanvasSize::default(),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> AppResult<()> {
        self.integration.validate()?;
        self.animation.validate()?;
        self.canvas.validate()?;
        if self.initial_model.trim().is_empty() {
            return Err(AppError::Config("initial_model must not be empty".into()));
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: SimConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> AppResult<Self> {
        let config: SimConfig = serde_json::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Load a config file, choosing the format from its extension.
pub fn load_config(path: &Path) -> AppResult<SimConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => SimConfig::from_yaml_str(&content),
        Some("json") => SimConfig::from_json_str(&content),
        _ => Err(AppError::Config(format!(
            "Unsupported config extension: {}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_models::SamplingPolicy;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.integration.step_count, 7500);
        assert_eq!(config.animation.window_size, 600);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = SimConfig::from_yaml_str(
            "initial_model: relay\nintegration:\n  grid_size: 8\n  sampling: display_box\n",
        )
        .unwrap();
        assert_eq!(config.initial_model, "relay");
        assert_eq!(config.integration.grid_size, 8);
        assert_eq!(config.integration.sampling, SamplingPolicy::DisplayBox);
        assert_eq!(config.integration.dt, 1e-3);
        assert_eq!(config.animation.stride, 2);
    }

    #[test]
    fn yaml_round_trip() {
        let mut config = SimConfig::default();
        config.tier = Tier::Spatial;
        config.canvas.width = 1280.0;
        let text = config.to_yaml_string().unwrap();
        assert_eq!(SimConfig::from_yaml_str(&text).unwrap(), config);
    }

    #[test]
    fn json_validation_runs() {
        let err = SimConfig::from_json_str(r#"{"animation": {"window_size": 0}}"#).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
        let err = SimConfig::from_json_str(r#"{"integration": {"dt": -1.0}}"#).unwrap_err();
        assert!(matches!(err, AppError::Simulation(_)));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = std::env::temp_dir().join("pf-app-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "initial_model = \"lotka\"").unwrap();
        assert!(matches!(load_config(&path), Err(AppError::Config(_))));
    }
}
