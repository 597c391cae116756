//! Lunisolar calendar conversion.
//!
//! This crate provides:
//! - Month assembly: new-moon periods numbered from the Winter Solstice month,
//!   with leap months where no principal term falls
//! - Year, month, day and hour sexagenary pillars
//! - Construction-star and yellow/black path day classification
//! - Single-instant and day-range conversion over precomputed or
//!   oracle-searched events

pub mod convert;
pub mod error;
pub mod ganzhi;
pub mod huangdao;
pub mod month;

pub use convert::{
    CalendarConfig, LunisolarDate, LunisolarView, PillarView, convert, convert_in_window,
    convert_range, convert_with_oracle,
};
pub use error::CalendarError;
pub use ganzhi::{
    DAY_CYCLE_EPOCH, SexagenaryPillars, day_pillar, hour_branch, hour_pillar, month_pillar,
    year_pillar,
};
pub use huangdao::{
    ALL_CONSTRUCTION_STARS, ALL_PATH_SPIRITS, ConstructionStar, HuangdaoDay, PathType,
    YellowPathSpirit,
};
pub use month::{Assignment, MonthPeriod, MonthTable, ZI_MONTH};
