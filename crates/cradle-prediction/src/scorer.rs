//! Confidence scoring.
//!
//! ```text
//! age-based:     min(0.35, ceiling)                    — population average
//! pattern-based: 0.5 + history bonus + consistency bonus, capped at 0.95
//! ```
//!
//! Monotonic non-decreasing in both pattern-based inputs: more history and
//! higher feedback consistency never lower the score.

use cradle_core::{Confidence, PredictionSource};

use crate::feedback::VerdictCounts;

/// Baseline for age-based predictions.
const AGE_BASED_BASELINE: f64 = 0.35;
/// Baseline for pattern-based predictions.
const PATTERN_BASELINE: f64 = 0.5;
/// Per-supporting-event bonus, saturating at `HISTORY_SATURATION` events.
const HISTORY_BONUS_PER_EVENT: f64 = 0.03;
const HISTORY_SATURATION: usize = 10;
/// Weight of feedback consistency in the final score.
const CONSISTENCY_WEIGHT: f64 = 0.2;
/// Cap for pattern-based predictions.
const PATTERN_CAP: f64 = 0.95;

/// Score a prediction.
///
/// `supporting_count` is the number of qualifying sleep events behind the
/// window; `feedback_consistency` is the agreement rate among recent
/// feedback in `[0, 1]` (see [`feedback_consistency`]). Both are ignored
/// for age-based predictions, which never exceed their ceiling.
pub fn score(
    source: PredictionSource,
    supporting_count: usize,
    feedback_consistency: f64,
) -> Confidence {
    match source {
        PredictionSource::AgeBased => {
            Confidence::new(AGE_BASED_BASELINE.min(Confidence::AGE_BASED_CEILING))
        }
        PredictionSource::PatternBased => {
            let history = supporting_count.min(HISTORY_SATURATION) as f64 * HISTORY_BONUS_PER_EVENT;
            let consistency = feedback_consistency.clamp(0.0, 1.0) * CONSISTENCY_WEIGHT;
            Confidence::new((PATTERN_BASELINE + history + consistency).min(PATTERN_CAP))
        }
    }
}

/// Agreement rate among tallied verdicts: the modal verdict's share of the
/// total, or 0.0 when no feedback has been recorded.
pub fn feedback_consistency(counts: &VerdictCounts) -> f64 {
    let total = counts.total();
    if total == 0 {
        return 0.0;
    }
    counts.modal_count() as f64 / total as f64
}
