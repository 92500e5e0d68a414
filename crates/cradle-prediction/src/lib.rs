//! # cradle-prediction
//!
//! Predicts the next nap window for a baby from age and recent sleep
//! history, refined by caregiver feedback.
//!
//! ## 2 Prediction Strategies
//!
//! | Strategy | Anchor |
//! |----------|--------|
//! | Pattern-based | End of this baby's most recent completed sleep |
//! | Age-based | Caller-supplied "now" when no sleep history exists |
//!
//! ## Pipeline
//!
//! history analysis → age-window lookup → feedback bias → confidence score.
//!
//! Every step is a total pure function: "cannot predict" is `None`, never
//! an error. The engine holds no state between calls and performs no I/O
//! beyond the injected [`EventSource`](cradle_core::EventSource).

pub mod engine;
pub mod feedback;
pub mod history;
pub mod scorer;
pub mod wake_windows;

pub use engine::PredictionEngine;
pub use feedback::{apply_adjustment, feedback_bias};
pub use history::{calculate_from_events, latest_completed_sleep};
pub use scorer::{feedback_consistency, score};
pub use wake_windows::{calculate_next_window, AgeWindow, AGE_WINDOW_TABLE};
