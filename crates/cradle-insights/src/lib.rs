//! # cradle-insights
//!
//! Summarizes a window of logged history into [`LearningMetrics`] for
//! reporting and insights displays. Metrics are recomputed on demand and
//! never fed back into prediction.
//!
//! [`LearningMetrics`]: cradle_core::LearningMetrics

pub mod metrics;

pub use metrics::aggregate;
