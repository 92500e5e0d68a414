use chrono::{DateTime, Utc};

use crate::errors::CradleResult;
use crate::models::{ActivityEvent, BabyProfile, NapFeedback};

/// Read-only view of the persistence layer.
///
/// The engine consumes this seam and nothing else: it never writes, never
/// caches, and assumes returned events are deduplicated and validated
/// (`end_time >= start_time` where both are present). Implementations that
/// block do so on their own execution context — the engine itself performs
/// no I/O beyond calling these methods.
pub trait EventSource: Send + Sync {
    // --- Events ---
    /// Events for `baby_id` whose `start_time` falls in `[from, to]`.
    fn events_in_range(
        &self,
        baby_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> CradleResult<Vec<ActivityEvent>>;

    // --- Feedback ---
    /// All recorded feedback for `baby_id`, in any order; the engine sorts.
    fn feedback_history(&self, baby_id: &str) -> CradleResult<Vec<NapFeedback>>;

    // --- Profile ---
    /// Profile lookup; `None` for an unknown baby.
    fn baby_profile(&self, baby_id: &str) -> CradleResult<Option<BabyProfile>>;
}
