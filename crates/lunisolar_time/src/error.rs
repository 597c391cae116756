//! Error types for civil date handling and parsing.

use thiserror::Error;

/// Errors from civil date validation or text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Month or day outside the civil calendar.
    #[error("invalid civil date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour, minute or second outside a civil day.
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    /// Malformed date/time or offset text.
    #[error("parse error: {0}")]
    Parse(String),
}
