//! Error taxonomy.
//!
//! "Cannot predict" is not an error anywhere in this workspace — it is
//! `Option::None`. Errors are reserved for invalid configuration and for
//! failures crossing the `EventSource` boundary.

pub mod config_error;
pub mod source_error;

pub use config_error::ConfigError;
pub use source_error::SourceError;

/// Top-level error type aggregating all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum CradleError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Result alias used across the workspace.
pub type CradleResult<T> = Result<T, CradleError>;
