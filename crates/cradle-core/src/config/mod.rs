//! Engine configuration: per-subsystem structs, TOML loading, validation.

pub mod defaults;
pub mod insights_config;
pub mod prediction_config;

pub use insights_config::InsightsConfig;
pub use prediction_config::PredictionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level Cradle configuration.
///
/// Every field has a sensible default, so `CradleConfig::default()` is a
/// fully working configuration and a TOML file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CradleConfig {
    pub prediction: PredictionConfig,
    pub insights: InsightsConfig,
}

impl CradleConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate all subsystem configs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prediction.validate()?;
        self.insights.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CradleConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = CradleConfig::from_toml_str(
            r#"
            [prediction]
            shift_increment_minutes = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.prediction.shift_increment_minutes, 10);
        assert_eq!(
            config.prediction.feedback_lookback,
            defaults::DEFAULT_FEEDBACK_LOOKBACK
        );
    }

    #[test]
    fn zero_lookback_rejected() {
        let result = CradleConfig::from_toml_str(
            r#"
            [prediction]
            feedback_lookback = 0
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field, .. }) if field == "prediction.feedback_lookback"
        ));
    }
}
