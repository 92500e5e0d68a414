use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_RECENT_ADJUSTMENTS;
use crate::errors::ConfigError;

/// Insights (reporting) subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Display cap on the `recent_adjustments` list.
    pub adjustments_cap: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            adjustments_cap: defaults::DEFAULT_ADJUSTMENTS_CAP,
        }
    }
}

impl InsightsConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adjustments_cap == 0 || self.adjustments_cap > MAX_RECENT_ADJUSTMENTS {
            return Err(ConfigError::InvalidValue {
                field: "insights.adjustments_cap",
                reason: format!(
                    "must be in 1..={MAX_RECENT_ADJUSTMENTS}, got {}",
                    self.adjustments_cap
                ),
            });
        }
        Ok(())
    }
}
