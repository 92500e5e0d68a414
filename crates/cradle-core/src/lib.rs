//! # cradle-core
//!
//! Foundation crate for the Cradle nap-prediction engine.
//! Defines all domain models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod confidence;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CradleConfig;
pub use confidence::Confidence;
pub use errors::{CradleError, CradleResult};
pub use models::{
    ActivityEvent, ActivityKind, BabyProfile, FeedbackVerdict, LearningMetrics, NapFeedback,
    NapPrediction, PredictedWindow, PredictionSource,
};
pub use traits::EventSource;
