/// Cradle engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on feedback entries considered for bias, regardless of config.
pub const MAX_FEEDBACK_LOOKBACK: usize = 50;

/// Hard cap on the length of `LearningMetrics::recent_adjustments`.
pub const MAX_RECENT_ADJUSTMENTS: usize = 20;

/// Mean Gregorian month length in days, used to derive fractional ages.
pub const MEAN_MONTH_DAYS: f64 = 30.44;
