//! Age-bucketed wake windows: how long after the end of the last sleep the
//! next nap is expected to start.

use chrono::{DateTime, Duration, Utc};
use cradle_core::PredictedWindow;

/// One row of the age-window table.
#[derive(Debug, Clone, Copy)]
pub struct AgeWindow {
    /// Lower bound, whole months, inclusive.
    pub min_months: u32,
    /// Upper bound, whole months, inclusive; `None` = open-ended.
    pub max_months: Option<u32>,
    /// Minutes after the last sleep end at which the window opens.
    pub start_offset_min: i64,
    /// Minutes after the last sleep end at which the window closes.
    pub end_offset_min: i64,
    /// Bucket label surfaced in `PredictedWindow::reason`.
    pub label: &'static str,
}

/// The single source of truth for age-based wake windows.
///
/// Rows are contiguous and exhaustive over all non-negative ages: every
/// floored whole-month age matches exactly one row, the last row being
/// open-ended.
pub const AGE_WINDOW_TABLE: &[AgeWindow] = &[
    AgeWindow {
        min_months: 0,
        max_months: Some(2),
        start_offset_min: 45,
        end_offset_min: 75,
        label: "age 0-2 months",
    },
    AgeWindow {
        min_months: 3,
        max_months: Some(4),
        start_offset_min: 75,
        end_offset_min: 120,
        label: "age 3-4 months",
    },
    AgeWindow {
        min_months: 5,
        max_months: Some(7),
        start_offset_min: 120,
        end_offset_min: 150,
        label: "age 5-7 months",
    },
    AgeWindow {
        min_months: 8,
        max_months: Some(10),
        start_offset_min: 150,
        end_offset_min: 180,
        label: "age 8-10 months",
    },
    AgeWindow {
        min_months: 11,
        max_months: Some(13),
        start_offset_min: 180,
        end_offset_min: 240,
        label: "age 11-13 months",
    },
    AgeWindow {
        min_months: 14,
        max_months: None,
        start_offset_min: 240,
        end_offset_min: 300,
        label: "age 14+ months",
    },
];

/// Look up the bucket for a fractional age, flooring to whole months.
/// `None` for NaN or negative ages.
pub fn bucket_for(age_months: f64) -> Option<&'static AgeWindow> {
    if age_months.is_nan() || age_months < 0.0 {
        return None;
    }
    let whole_months = age_months.floor() as u32;
    AGE_WINDOW_TABLE.iter().find(|w| {
        whole_months >= w.min_months && w.max_months.map_or(true, |max| whole_months <= max)
    })
}

/// Compute the next nap window from the end of the last sleep and the
/// baby's age.
///
/// Total function: `None` when the anchor is absent or the age is invalid.
/// Callers treat `None` as "cannot predict", not as an error.
pub fn calculate_next_window(
    last_sleep_end: Option<DateTime<Utc>>,
    age_months: f64,
) -> Option<PredictedWindow> {
    let anchor = last_sleep_end?;
    let bucket = bucket_for(age_months)?;
    Some(PredictedWindow::new(
        anchor + Duration::minutes(bucket.start_offset_min),
        anchor + Duration::minutes(bucket.end_offset_min),
        bucket.label,
    ))
}
