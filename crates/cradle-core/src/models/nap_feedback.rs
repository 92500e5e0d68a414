use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::predicted_window::PredictedWindow;

/// Caregiver judgment of how a past prediction compared to actual behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackVerdict {
    /// The predicted window opened before the baby was actually ready.
    TooEarly,
    JustRight,
    /// The predicted window opened after the baby was already tired.
    TooLate,
}

/// One recorded piece of feedback tying a past window to a verdict.
///
/// Created by the caregiver-facing UI once a prediction has been observed
/// against actual behavior; immutable once created. Retention is the
/// external store's concern — the engine never deletes feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NapFeedback {
    pub id: String,
    pub baby_id: String,
    /// The window the verdict applies to.
    pub window: PredictedWindow,
    pub verdict: FeedbackVerdict,
    pub recorded_at: DateTime<Utc>,
}
