//! Default values for all config parameters.

/// How many of the most recent feedback entries feed the bias computation.
pub const DEFAULT_FEEDBACK_LOOKBACK: usize = 5;

/// Fixed shift (minutes) applied when feedback shows a systematic bias.
pub const DEFAULT_SHIFT_INCREMENT_MINUTES: i64 = 15;

/// Trailing window (days) of events the source-backed engine fetches.
pub const DEFAULT_HISTORY_DAYS: usize = 7;

/// Display cap on `LearningMetrics::recent_adjustments`.
pub const DEFAULT_ADJUSTMENTS_CAP: usize = 5;
