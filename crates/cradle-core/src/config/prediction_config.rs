use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_FEEDBACK_LOOKBACK;
use crate::errors::ConfigError;

/// Prediction subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// How many of the most recent feedback entries are considered when
    /// computing a systematic bias. Bounded to avoid stale drift dominating.
    pub feedback_lookback: usize,
    /// Fixed shift (minutes) applied when a strict majority of recent
    /// feedback agrees the windows ran early or late.
    pub shift_increment_minutes: i64,
    /// Trailing window (days) of events fetched by the source-backed
    /// prediction path.
    pub history_days: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            feedback_lookback: defaults::DEFAULT_FEEDBACK_LOOKBACK,
            shift_increment_minutes: defaults::DEFAULT_SHIFT_INCREMENT_MINUTES,
            history_days: defaults::DEFAULT_HISTORY_DAYS,
        }
    }
}

impl PredictionConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feedback_lookback == 0 || self.feedback_lookback > MAX_FEEDBACK_LOOKBACK {
            return Err(ConfigError::InvalidValue {
                field: "prediction.feedback_lookback",
                reason: format!(
                    "must be in 1..={MAX_FEEDBACK_LOOKBACK}, got {}",
                    self.feedback_lookback
                ),
            });
        }
        if self.shift_increment_minutes < 0 {
            return Err(ConfigError::InvalidValue {
                field: "prediction.shift_increment_minutes",
                reason: format!("must be non-negative, got {}", self.shift_increment_minutes),
            });
        }
        if self.history_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "prediction.history_days",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
