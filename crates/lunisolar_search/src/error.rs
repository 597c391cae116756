//! Error types for event search.

use thiserror::Error;

/// Errors from new-moon and solar-term search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The longitude oracle failed or returned a non-finite value.
    #[error("oracle error: {0}")]
    Oracle(String),
    /// More events were found than the configured capacity allows.
    #[error("more than {capacity} {kind} in the requested range")]
    CapacityExceeded { kind: &'static str, capacity: usize },
    /// Start year after end year.
    #[error("invalid year range {start}..={end}")]
    InvalidYearRange { start: i32, end: i32 },
}
