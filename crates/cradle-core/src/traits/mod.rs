//! Trait seams between the engine and its external collaborators.

pub mod event_source;

pub use event_source::EventSource;
