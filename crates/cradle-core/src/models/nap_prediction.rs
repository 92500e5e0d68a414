use serde::{Deserialize, Serialize};

use super::predicted_window::PredictedWindow;
use crate::confidence::Confidence;

/// Which strategy produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionSource {
    /// Population-average age bucket; no usable sleep history.
    AgeBased,
    /// Anchored to this baby's most recent observed sleep.
    PatternBased,
}

/// A predicted nap window with a confidence score attached.
///
/// This is the engine's output type, handed to display and
/// notification-scheduling layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NapPrediction {
    pub window: PredictedWindow,
    /// How much the engine trusts this prediction.
    pub confidence: Confidence,
    pub source: PredictionSource,
    /// Number of qualifying sleep events backing a pattern-based window;
    /// 0 for age-based predictions.
    pub supporting_count: usize,
}
