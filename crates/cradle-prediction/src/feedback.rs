//! Turns caregiver feedback into a systematic window bias.
//!
//! A strict majority of recent `TooEarly` verdicts shifts future windows
//! later; `TooLate` shifts them earlier; `JustRight` or any tie applies no
//! shift — the conservative default.

use cradle_core::config::PredictionConfig;
use cradle_core::{FeedbackVerdict, NapFeedback, PredictedWindow};

/// Per-verdict tallies over a lookback window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerdictCounts {
    pub too_early: usize,
    pub just_right: usize,
    pub too_late: usize,
}

impl VerdictCounts {
    pub fn total(&self) -> usize {
        self.too_early + self.just_right + self.too_late
    }

    /// Size of the largest tally.
    pub fn modal_count(&self) -> usize {
        self.too_early.max(self.just_right).max(self.too_late)
    }
}

/// Tally verdicts over any collection of feedback entries.
pub fn tally<'a>(entries: impl IntoIterator<Item = &'a NapFeedback>) -> VerdictCounts {
    let mut counts = VerdictCounts::default();
    for f in entries {
        match f.verdict {
            FeedbackVerdict::TooEarly => counts.too_early += 1,
            FeedbackVerdict::JustRight => counts.just_right += 1,
            FeedbackVerdict::TooLate => counts.too_late += 1,
        }
    }
    counts
}

/// Tally verdicts for `baby_id` over the most recent `feedback_lookback`
/// entries.
pub fn tally_recent(
    feedback: &[NapFeedback],
    baby_id: &str,
    config: &PredictionConfig,
) -> VerdictCounts {
    let mut own: Vec<&NapFeedback> = feedback.iter().filter(|f| f.baby_id == baby_id).collect();
    own.sort_by_key(|f| std::cmp::Reverse(f.recorded_at));
    own.truncate(config.feedback_lookback);
    tally(own)
}

/// The systematic bias (minutes, positive = later) implied by recent
/// feedback. Zero unless one verdict holds a strict majority.
pub fn feedback_bias(feedback: &[NapFeedback], baby_id: &str, config: &PredictionConfig) -> i64 {
    bias_from_counts(&tally_recent(feedback, baby_id, config), config)
}

/// Bias from pre-computed tallies.
pub fn bias_from_counts(counts: &VerdictCounts, config: &PredictionConfig) -> i64 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }
    // Strict majority: more than half of the considered entries.
    let majority = total / 2 + 1;
    if counts.too_early >= majority {
        config.shift_increment_minutes
    } else if counts.too_late >= majority {
        -config.shift_increment_minutes
    } else {
        0
    }
}

/// Apply the learned bias to a raw window.
///
/// Purely additive: the feedback list is untouched and the shift is local
/// to the returned window. Returns the window plus the shift that was
/// applied, so callers can surface it in metrics.
pub fn apply_adjustment(
    window: &PredictedWindow,
    feedback: &[NapFeedback],
    baby_id: &str,
    config: &PredictionConfig,
) -> (PredictedWindow, i64) {
    let shift = feedback_bias(feedback, baby_id, config);
    if shift == 0 {
        return (window.clone(), 0);
    }
    (window.shifted(shift), shift)
}
