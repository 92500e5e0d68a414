use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A predicted `[start, end]` time range during which the next sleep
/// episode is expected to begin.
///
/// Invariant: `start <= end`, maintained by construction — `new` normalizes
/// inverted bounds and `shifted` clamps shifts that would invert the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Human-readable explanation of where the window came from,
    /// e.g. "age 3-4 months".
    pub reason: String,
}

impl PredictedWindow {
    /// Create a window, swapping the bounds if they arrive inverted.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, reason: impl Into<String>) -> Self {
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        Self {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Window length.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Return a copy shifted by `minutes` (positive = later).
    ///
    /// Both bounds move together, so a uniform shift cannot invert the
    /// window; the constructor re-normalizes regardless, which clamps any
    /// future asymmetric caller.
    pub fn shifted(&self, minutes: i64) -> Self {
        let delta = Duration::minutes(minutes);
        Self::new(self.start + delta, self.end + delta, self.reason.clone())
    }

    /// Whether `at` falls inside the window (inclusive).
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}
