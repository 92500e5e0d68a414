/// Event-source (persistence boundary) errors.
///
/// These surface upstream store failures to the façade's source-backed
/// entry points; the pure prediction path never produces them.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("query failed: {reason}")]
    QueryFailed { reason: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}
