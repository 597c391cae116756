//! Astronomical event search for lunisolar calendars.
//!
//! This crate provides:
//! - The `LongitudeOracle` seam: any source of Sun/Moon ecliptic longitude
//! - `AnalyticOracle`, a self-contained low-precision Sun/Moon model
//! - New-moon search (Moon-Sun elongation crossing zero)
//! - Solar-term search (Sun longitude crossing each 15° boundary)
//! - `EventWindow`, a multi-year batch of both event kinds for reuse across many dates
//!
//! Both searches step a fixed grid, then bisect each bracketed crossing.

pub mod analytic;
pub mod error;
pub mod finder;
pub mod finder_types;
pub mod oracle;
pub(crate) mod search_util;
pub mod solar_term;

pub use analytic::{AnalyticOracle, moon_longitude_deg, sun_longitude_deg};
pub use error::SearchError;
pub use finder::{compute_window, elongation_at, find_new_moons, find_solar_terms};
pub use finder_types::{EventWindow, SearchConfig, SolarTermEvent};
pub use oracle::{Body, LongitudeOracle};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm};
