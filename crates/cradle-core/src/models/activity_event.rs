use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of logged activity.
///
/// Exhaustive by design: every place the engine inspects an event kind
/// matches on this enum, so adding a kind is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Sleep,
    Feed,
    Diaper,
    TummyTime,
}

/// One logged activity, as handed to the engine by the persistence layer.
///
/// Events are read-only inputs: the engine never mutates or persists them.
/// The store guarantees deduplication and `end_time >= start_time` where
/// both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    /// Store-assigned identifier.
    pub id: String,
    /// The baby this event was logged for.
    pub baby_id: String,
    /// Kind of activity.
    pub kind: ActivityKind,
    /// When the activity started.
    pub start_time: DateTime<Utc>,
    /// When the activity ended; `None` while still in progress.
    pub end_time: Option<DateTime<Utc>>,
    /// Free-form caregiver note.
    pub note: Option<String>,
}

impl ActivityEvent {
    /// Whether this event is a completed sleep session — the only kind of
    /// event that can anchor a pattern-based prediction.
    pub fn is_completed_sleep(&self) -> bool {
        match self.kind {
            ActivityKind::Sleep => self.end_time.is_some(),
            ActivityKind::Feed | ActivityKind::Diaper | ActivityKind::TummyTime => false,
        }
    }
}
