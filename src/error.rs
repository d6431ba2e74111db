//! Error taxonomy for registry queries.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Failures surfaced by registry queries.
///
/// Both variants are local, synchronous failures returned at the call site
/// that triggers them. Recording and resetting never fail; only the read
/// side does.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatsError {
    /// The label was never recorded.
    #[error("unknown label: {0}")]
    UnknownLabel(String),
    /// min/max requested for a series with zero recorded values.
    #[error("no samples recorded for label: {0}")]
    EmptySeries(String),
}
