//! Learning-metrics aggregation.

use std::collections::HashSet;

use chrono::NaiveDate;
use cradle_core::{ActivityEvent, ActivityKind, CradleConfig, LearningMetrics, NapFeedback};
use cradle_prediction::feedback;
use tracing::debug;

/// Summarize a window of events and feedback into reporting metrics.
///
/// - `days_logged`: distinct UTC calendar days with at least one event of
///   any kind. Day-boundary normalization is the caller's concern; this
///   function just buckets the timestamps it is handed.
/// - `nap_count`: raw count of sleep events, completed or not — distinct
///   from the "qualifying" filter the prediction path applies.
/// - `recent_adjustments`: the non-zero bias the adjuster would have
///   applied as of each feedback entry, newest first, capped for display.
///
/// Empty `events` yields the all-zero summary; that is a normal condition,
/// not an error. Pure function: assumes validated input, performs no I/O.
pub fn aggregate(
    events: &[ActivityEvent],
    feedback_history: &[NapFeedback],
    baby_id: &str,
    config: &CradleConfig,
) -> LearningMetrics {
    if events.is_empty() {
        return LearningMetrics::empty();
    }

    let days: HashSet<NaiveDate> = events.iter().map(|e| e.start_time.date_naive()).collect();

    let nap_count = events
        .iter()
        .filter(|e| matches!(e.kind, ActivityKind::Sleep))
        .count();

    let recent_adjustments = rolling_adjustments(feedback_history, baby_id, config);

    let metrics = LearningMetrics {
        days_logged: days.len(),
        nap_count,
        recent_adjustments,
    };
    debug!(
        baby_id,
        days_logged = metrics.days_logged,
        nap_count = metrics.nap_count,
        "aggregated learning metrics"
    );
    metrics
}

/// For each feedback entry, newest first, the bias the adjuster would have
/// applied given the lookback window ending at that entry. Zero shifts are
/// dropped; the list is capped at `adjustments_cap`.
fn rolling_adjustments(
    feedback_history: &[NapFeedback],
    baby_id: &str,
    config: &CradleConfig,
) -> Vec<i64> {
    let mut own: Vec<&NapFeedback> = feedback_history
        .iter()
        .filter(|f| f.baby_id == baby_id)
        .collect();
    own.sort_by_key(|f| std::cmp::Reverse(f.recorded_at));

    let lookback = config.prediction.feedback_lookback;
    own.iter()
        .enumerate()
        .map(|(i, _)| {
            let window = &own[i..(i + lookback).min(own.len())];
            let counts = feedback::tally(window.iter().copied());
            feedback::bias_from_counts(&counts, &config.prediction)
        })
        .filter(|shift| *shift != 0)
        .take(config.insights.adjustments_cap)
        .collect()
}
