use serde::{Deserialize, Serialize};

/// Reporting summary of a window of logged history.
///
/// Computed on demand from caller-supplied events, never cached, and never
/// fed back into prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningMetrics {
    /// Distinct calendar days with at least one event of any kind.
    pub days_logged: usize,
    /// Raw count of sleep events, completed or not.
    pub nap_count: usize,
    /// Non-zero feedback-derived shifts (minutes), newest first, bounded
    /// for display.
    pub recent_adjustments: Vec<i64>,
}

impl LearningMetrics {
    /// The all-zero summary returned for an empty event window.
    pub fn empty() -> Self {
        Self::default()
    }
}
