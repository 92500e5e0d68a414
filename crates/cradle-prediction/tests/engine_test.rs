use chrono::{DateTime, Duration, TimeZone, Utc};
use cradle_core::errors::SourceError;
use cradle_core::{
    ActivityEvent, ActivityKind, BabyProfile, CradleConfig, CradleResult, EventSource,
    FeedbackVerdict, NapFeedback, PredictedWindow, PredictionSource,
};
use cradle_prediction::{engine, PredictionEngine};
use std::sync::Mutex;

// ── Mock source ───────────────────────────────────────────────────────────

struct MockEventSource {
    profiles: Vec<BabyProfile>,
    events: Mutex<Vec<ActivityEvent>>,
    feedback: Mutex<Vec<NapFeedback>>,
}

impl MockEventSource {
    fn new(profiles: Vec<BabyProfile>) -> Self {
        Self {
            profiles,
            events: Mutex::new(Vec::new()),
            feedback: Mutex::new(Vec::new()),
        }
    }

    fn with_events(mut self, events: Vec<ActivityEvent>) -> Self {
        self.events = Mutex::new(events);
        self
    }

    fn with_feedback(mut self, feedback: Vec<NapFeedback>) -> Self {
        self.feedback = Mutex::new(feedback);
        self
    }
}

impl EventSource for MockEventSource {
    fn events_in_range(
        &self,
        baby_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CradleResult<Vec<ActivityEvent>> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.baby_id == baby_id && e.start_time >= from && e.start_time <= to)
            .cloned()
            .collect())
    }

    fn feedback_history(&self, baby_id: &str) -> CradleResult<Vec<NapFeedback>> {
        Ok(self
            .feedback
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.baby_id == baby_id)
            .cloned()
            .collect())
    }

    fn baby_profile(&self, baby_id: &str) -> CradleResult<Option<BabyProfile>> {
        Ok(self.profiles.iter().find(|p| p.id == baby_id).cloned())
    }
}

/// Source whose store is unreachable.
struct FailingSource;

impl EventSource for FailingSource {
    fn events_in_range(
        &self,
        _baby_id: &str,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> CradleResult<Vec<ActivityEvent>> {
        Err(SourceError::Unavailable {
            reason: "store offline".to_string(),
        }
        .into())
    }

    fn feedback_history(&self, _baby_id: &str) -> CradleResult<Vec<NapFeedback>> {
        Err(SourceError::Unavailable {
            reason: "store offline".to_string(),
        }
        .into())
    }

    fn baby_profile(&self, _baby_id: &str) -> CradleResult<Option<BabyProfile>> {
        Ok(Some(three_month_old()))
    }
}

// ── Fixtures ──────────────────────────────────────────────────────────────

fn three_month_old() -> BabyProfile {
    BabyProfile::new("b1", Utc.with_ymd_and_hms(2023, 10, 15, 0, 0, 0).unwrap())
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap()
}

fn make_event(
    id: &str,
    kind: ActivityKind,
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
) -> ActivityEvent {
    ActivityEvent {
        id: id.to_string(),
        baby_id: "b1".to_string(),
        kind,
        start_time: start,
        end_time: end,
        note: None,
    }
}

fn last_sleep_ending_at_11() -> ActivityEvent {
    make_event(
        uuid::Uuid::new_v4().to_string().as_str(),
        ActivityKind::Sleep,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        Some(Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap()),
    )
}

fn make_feedback(verdict: FeedbackVerdict, minutes_ago: i64) -> NapFeedback {
    let start = now() - Duration::hours(3);
    NapFeedback {
        id: uuid::Uuid::new_v4().to_string(),
        baby_id: "b1".to_string(),
        window: PredictedWindow::new(start, start + Duration::minutes(45), "age 3-4 months"),
        verdict,
        recorded_at: now() - Duration::minutes(minutes_ago),
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────

#[test]
fn three_month_old_pattern_window() {
    let source =
        MockEventSource::new(vec![three_month_old()]).with_events(vec![last_sleep_ending_at_11()]);
    let engine = PredictionEngine::new(source);

    let prediction = engine.predict_next_nap("b1", now()).unwrap().unwrap();

    assert_eq!(
        prediction.window.start,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 15, 0).unwrap()
    );
    assert_eq!(
        prediction.window.end,
        Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap()
    );
    assert_eq!(prediction.source, PredictionSource::PatternBased);
    assert_eq!(prediction.supporting_count, 1);

    // Above what the same engine would say with no history at all.
    let empty = MockEventSource::new(vec![three_month_old()]);
    let age_based = PredictionEngine::new(empty)
        .predict_next_nap("b1", now())
        .unwrap()
        .unwrap();
    assert_eq!(age_based.source, PredictionSource::AgeBased);
    assert!(prediction.confidence > age_based.confidence);
}

#[test]
fn consistent_too_early_feedback_shifts_window_later() {
    let feedback = vec![
        make_feedback(FeedbackVerdict::TooEarly, 60),
        make_feedback(FeedbackVerdict::TooEarly, 120),
        make_feedback(FeedbackVerdict::TooEarly, 180),
    ];
    let source = MockEventSource::new(vec![three_month_old()])
        .with_events(vec![last_sleep_ending_at_11()])
        .with_feedback(feedback);
    let engine = PredictionEngine::new(source);
    let increment = engine.config().prediction.shift_increment_minutes;

    let prediction = engine.predict_next_nap("b1", now()).unwrap().unwrap();

    assert_eq!(
        prediction.window.start,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 15, 0).unwrap() + Duration::minutes(increment)
    );
    assert_eq!(
        prediction.window.end,
        Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap() + Duration::minutes(increment)
    );
    assert!(prediction.window.start <= prediction.window.end);
}

#[test]
fn no_sleep_history_falls_back_to_age_based() {
    let source = MockEventSource::new(vec![three_month_old()]);
    let engine = PredictionEngine::new(source);

    let prediction = engine.predict_next_nap("b1", now()).unwrap().unwrap();

    assert_eq!(prediction.source, PredictionSource::AgeBased);
    assert_eq!(prediction.supporting_count, 0);
    // Anchored at "now" with the 3-4 month offsets.
    assert_eq!(prediction.window.start, now() + Duration::minutes(75));
    assert_eq!(prediction.window.end, now() + Duration::minutes(120));
}

#[test]
fn feed_only_history_behaves_like_empty() {
    let feed = make_event(
        "feed-1",
        ActivityKind::Feed,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        None,
    );
    let source = MockEventSource::new(vec![three_month_old()]).with_events(vec![feed]);
    let engine = PredictionEngine::new(source);

    let prediction = engine.predict_next_nap("b1", now()).unwrap().unwrap();
    assert_eq!(prediction.source, PredictionSource::AgeBased);
}

#[test]
fn unknown_baby_is_none_not_error() {
    let engine = PredictionEngine::new(MockEventSource::new(vec![]));
    assert!(engine.predict_next_nap("ghost", now()).unwrap().is_none());
}

#[test]
fn store_failure_propagates_as_error() {
    let engine = PredictionEngine::new(FailingSource);
    assert!(engine.predict_next_nap("b1", now()).is_err());
}

#[test]
fn identical_inputs_identical_outputs() {
    let source =
        MockEventSource::new(vec![three_month_old()]).with_events(vec![last_sleep_ending_at_11()]);
    let engine = PredictionEngine::new(source);

    let first = engine.predict_next_nap("b1", now()).unwrap();
    let second = engine.predict_next_nap("b1", now()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn pure_pipeline_ignores_other_babies_feedback() {
    let mut other = make_feedback(FeedbackVerdict::TooEarly, 60);
    other.baby_id = "b2".to_string();
    let feedback = vec![
        other.clone(),
        {
            let mut f = other.clone();
            f.id = "f2".to_string();
            f
        },
        {
            let mut f = other;
            f.id = "f3".to_string();
            f
        },
    ];

    let events = vec![last_sleep_ending_at_11()];
    let dob = three_month_old().date_of_birth;
    let config = CradleConfig::default();

    let prediction = engine::predict(&events, dob, &feedback, "b1", now(), &config).unwrap();
    // Unbiased window: another baby's feedback must not shift it.
    assert_eq!(
        prediction.window.start,
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 15, 0).unwrap()
    );
}
