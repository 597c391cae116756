//! Error types for lunisolar conversion.

use thiserror::Error;

use lunisolar_search::SearchError;
use lunisolar_time::TimeError;

/// Errors from month assembly and date conversion.
///
/// None are retried internally; widening the event window is up to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Fewer than two new moons or no solar terms for the window.
    #[error("insufficient astronomical data: need at least 2 new moons and 1 solar term")]
    InsufficientAstronomicalData,
    /// No Winter Solstice term, or none falling inside a month period.
    #[error("no Winter Solstice anchor found in the event window")]
    NoAnchorFound,
    /// The query date is not covered by any month period.
    #[error("date not covered by any computed month period")]
    DateOutOfPeriodRange,
    /// The requested output exceeds the configured capacity.
    #[error("result needs {needed} entries but capacity is {capacity}")]
    ResultBufferTooSmall { needed: usize, capacity: usize },
    /// Invalid calendar configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
