use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MEAN_MONTH_DAYS;

/// The slice of a baby's profile the engine needs: identity and date of
/// birth. Everything else about the baby lives outside this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyProfile {
    pub id: String,
    pub date_of_birth: DateTime<Utc>,
}

impl BabyProfile {
    pub fn new(id: impl Into<String>, date_of_birth: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            date_of_birth,
        }
    }

    /// Fractional age in months at `at`, using the mean Gregorian month
    /// length. Negative when `at` precedes the date of birth; callers
    /// treat negative ages as invalid input.
    pub fn age_in_months(&self, at: DateTime<Utc>) -> f64 {
        let days = (at - self.date_of_birth).num_seconds() as f64 / 86_400.0;
        days / MEAN_MONTH_DAYS
    }
}
