//! PredictionEngine — orchestrates the full pipeline:
//! history analysis → window lookup → feedback bias → confidence score.

use chrono::{DateTime, Duration, Utc};
use cradle_core::{
    ActivityEvent, CradleConfig, CradleResult, EventSource, NapFeedback, NapPrediction,
    PredictionSource,
};
use tracing::debug;

use crate::{feedback, history, scorer, wake_windows};

/// The prediction façade.
///
/// Holds an injected [`EventSource`] and configuration; every call is
/// stateless and idempotent given identical inputs, so the engine is safe
/// to share across threads and babies.
pub struct PredictionEngine<S: EventSource> {
    source: S,
    config: CradleConfig,
}

impl<S: EventSource> PredictionEngine<S> {
    /// Create an engine over a data source with default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, CradleConfig::default())
    }

    /// Create an engine with explicit configuration.
    pub fn with_config(source: S, config: CradleConfig) -> Self {
        Self { source, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &CradleConfig {
        &self.config
    }

    /// Predict the next nap for `baby_id` as of `now`.
    ///
    /// Fetches the trailing `history_days` of events plus the feedback
    /// history, then runs the pure pipeline. `Ok(None)` means "cannot
    /// predict" — unknown baby or no usable window — while store failures
    /// propagate as errors.
    pub fn predict_next_nap(
        &self,
        baby_id: &str,
        now: DateTime<Utc>,
    ) -> CradleResult<Option<NapPrediction>> {
        let Some(profile) = self.source.baby_profile(baby_id)? else {
            debug!(baby_id, "no profile found, cannot predict");
            return Ok(None);
        };

        let from = now - Duration::days(self.config.prediction.history_days as i64);
        let events = self.source.events_in_range(baby_id, from, now)?;
        let feedback = self.source.feedback_history(baby_id)?;

        Ok(predict(
            &events,
            profile.date_of_birth,
            &feedback,
            baby_id,
            now,
            &self.config,
        ))
    }
}

/// The pure prediction pipeline.
///
/// Pattern-based when a completed sleep exists in `events`; otherwise an
/// age-based window anchored at `now`. The raw window is then shifted by
/// the learned feedback bias and scored. Total: `None` when no window can
/// be derived at all.
pub fn predict(
    events: &[ActivityEvent],
    date_of_birth: DateTime<Utc>,
    feedback: &[NapFeedback],
    baby_id: &str,
    now: DateTime<Utc>,
    config: &CradleConfig,
) -> Option<NapPrediction> {
    let raw = match history::calculate_from_events(events, date_of_birth, now) {
        Some(prediction) => {
            debug!(
                baby_id,
                supporting_count = prediction.supporting_count,
                "pattern-based window from last completed sleep"
            );
            prediction
        }
        None => {
            // No usable sleep history: population-average window anchored
            // at the current time.
            let age_months =
                cradle_core::BabyProfile::new(baby_id, date_of_birth).age_in_months(now);
            let window = wake_windows::calculate_next_window(Some(now), age_months)?;
            debug!(baby_id, age_months, "age-based fallback window");
            NapPrediction {
                window,
                confidence: scorer::score(PredictionSource::AgeBased, 0, 0.0),
                source: PredictionSource::AgeBased,
                supporting_count: 0,
            }
        }
    };

    let counts = feedback::tally_recent(feedback, baby_id, &config.prediction);
    let shift = feedback::bias_from_counts(&counts, &config.prediction);
    let window = if shift != 0 {
        debug!(baby_id, shift, "applying feedback bias");
        raw.window.shifted(shift)
    } else {
        raw.window
    };

    let consistency = scorer::feedback_consistency(&counts);
    let confidence = scorer::score(raw.source, raw.supporting_count, consistency);

    Some(NapPrediction {
        window,
        confidence,
        source: raw.source,
        supporting_count: raw.supporting_count,
    })
}
