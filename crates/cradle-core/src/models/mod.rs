//! Domain models shared across the workspace.

pub mod activity_event;
pub mod baby_profile;
pub mod learning_metrics;
pub mod nap_feedback;
pub mod nap_prediction;
pub mod predicted_window;

pub use activity_event::{ActivityEvent, ActivityKind};
pub use baby_profile::BabyProfile;
pub use learning_metrics::LearningMetrics;
pub use nap_feedback::{FeedbackVerdict, NapFeedback};
pub use nap_prediction::{NapPrediction, PredictionSource};
pub use predicted_window::PredictedWindow;
