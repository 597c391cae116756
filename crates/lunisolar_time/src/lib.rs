//! Civil calendar arithmetic and UTC instants.
//!
//! This crate provides:
//! - Proleptic Gregorian day numbers (both directions, exact for any year)
//! - `UnixTime`, the continuous instant type used by the search and calendar crates
//! - Decomposition of an instant into local wall-clock parts under a fixed UTC offset
//!
//! No timezone database is consulted; callers always supply the offset in seconds.

pub mod civil;
pub mod error;
pub mod unix_time;

pub use civil::{CivilDate, civil_from_days, days_from_civil, days_in_month, is_leap_year};
pub use error::TimeError;
pub use unix_time::{
    J1970_JD, LocalDateTime, MAX_UTC_OFFSET_SECONDS, SECONDS_PER_DAY, UnixTime, parse_utc_offset,
};
