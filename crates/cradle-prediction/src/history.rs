//! Extracts the prediction anchor from logged activity history.

use chrono::{DateTime, Utc};
use cradle_core::{ActivityEvent, BabyProfile, NapPrediction, PredictionSource};

use crate::scorer;
use crate::wake_windows;

/// The most recent completed sleep event, if any.
///
/// Only completed sleeps qualify — an in-progress sleep has no wake time to
/// anchor on. Selection is deterministic: latest `end_time`, ties broken by
/// latest `start_time`, then by greatest `id`.
pub fn latest_completed_sleep(events: &[ActivityEvent]) -> Option<&ActivityEvent> {
    events
        .iter()
        .filter(|e| e.is_completed_sleep())
        .max_by(|a, b| {
            (a.end_time, a.start_time, &a.id).cmp(&(b.end_time, b.start_time, &b.id))
        })
}

/// Derive a pattern-based prediction from logged events.
///
/// `None` when no completed sleep exists; the caller decides whether to
/// fall back to an age-based window or surface "insufficient data".
pub fn calculate_from_events(
    events: &[ActivityEvent],
    date_of_birth: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<NapPrediction> {
    let anchor = latest_completed_sleep(events)?;
    let supporting_count = events.iter().filter(|e| e.is_completed_sleep()).count();

    let profile = BabyProfile::new(anchor.baby_id.clone(), date_of_birth);
    let age_months = profile.age_in_months(now);
    let window = wake_windows::calculate_next_window(anchor.end_time, age_months)?;

    Some(NapPrediction {
        window,
        confidence: scorer::score(PredictionSource::PatternBased, supporting_count, 0.0),
        source: PredictionSource::PatternBased,
        supporting_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use cradle_core::ActivityKind;

    fn sleep(id: &str, start_h: u32, end_h: Option<u32>) -> ActivityEvent {
        ActivityEvent {
            id: id.to_string(),
            baby_id: "b1".to_string(),
            kind: ActivityKind::Sleep,
            start_time: Utc.with_ymd_and_hms(2024, 1, 15, start_h, 0, 0).unwrap(),
            end_time: end_h.map(|h| Utc.with_ymd_and_hms(2024, 1, 15, h, 0, 0).unwrap()),
            note: None,
        }
    }

    #[test]
    fn picks_latest_end_time() {
        let events = vec![sleep("e1", 10, Some(11)), sleep("e2", 14, Some(15))];
        assert_eq!(latest_completed_sleep(&events).unwrap().id, "e2");
    }

    #[test]
    fn in_progress_sleep_never_anchors() {
        let events = vec![sleep("e1", 10, Some(11)), sleep("e2", 16, None)];
        assert_eq!(latest_completed_sleep(&events).unwrap().id, "e1");
    }

    #[test]
    fn end_tie_breaks_on_start_then_id() {
        let mut a = sleep("a", 9, Some(11));
        a.start_time = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let b = sleep("b", 10, Some(11));
        assert_eq!(latest_completed_sleep(&[a.clone(), b.clone()]).unwrap().id, "b");

        let c = sleep("c", 10, Some(11));
        assert_eq!(latest_completed_sleep(&[b, c]).unwrap().id, "c");
    }

    #[test]
    fn empty_history_is_none() {
        let dob = Utc.with_ymd_and_hms(2023, 10, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap();
        assert!(calculate_from_events(&[], dob, now).is_none());
    }
}
