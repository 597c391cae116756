//! Solar instant to lunisolar date conversion.
//!
//! Conversion is split in two steps: computing the new moons and solar terms
//! of a window (expensive, oracle-bound) and resolving dates inside it (cheap).
//! [`convert`] takes precomputed events; [`convert_with_oracle`] and
//! [`convert_range`] run the search themselves.

use serde::Serialize;
use tracing::debug;

use lunisolar_base::{GanZhi, Language};
use lunisolar_search::{EventWindow, LongitudeOracle, SearchConfig, SolarTermEvent, compute_window};
use lunisolar_time::{CivilDate, LocalDateTime, UnixTime};

use crate::error::CalendarError;
use crate::ganzhi::{SexagenaryPillars, day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::huangdao::HuangdaoDay;
use crate::month::{MonthPeriod, MonthTable};

/// Configuration for oracle-driven conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalendarConfig {
    pub search: SearchConfig,
    /// Years searched on each side of the query year (default 1).
    pub window_margin_years: u32,
    /// Most days a single [`convert_range`] call may produce (default 3660).
    pub max_range_days: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            window_margin_years: 1,
            max_range_days: 3660,
        }
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        self.search.validate()?;
        // Month 11 of the previous year must be inside the window.
        if self.window_margin_years == 0 {
            return Err("window_margin_years must be >= 1");
        }
        if self.window_margin_years > 50 {
            return Err("window_margin_years must be <= 50");
        }
        if self.max_range_days == 0 {
            return Err("max_range_days must be > 0");
        }
        Ok(())
    }

    /// Search config with capacities raised for `start_year..=end_year`.
    fn search_for(&self, start_year: i32, end_year: i32) -> SearchConfig {
        let years = (end_year - start_year + 1).max(1) as u32;
        self.search.sized_for_years(years)
    }
}

/// A lunisolar date with its pillars and day classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunisolarDate {
    pub lunar_year: i32,
    /// 1..=12
    pub lunar_month: u8,
    /// 1..=30
    pub lunar_day: u8,
    pub is_leap_month: bool,
    pub pillars: SexagenaryPillars,
    pub huangdao: HuangdaoDay,
    /// The queried instant as local wall-clock time.
    pub solar: LocalDateTime,
    pub utc_offset_seconds: i64,
}

impl LunisolarDate {
    /// Month and day in words, e.g. `闰六月初八` or `Leap Month 6, Day 8`.
    pub fn date_label(&self, lang: Language) -> String {
        let (m, d, leap) = (self.lunar_month, self.lunar_day, self.is_leap_month);
        match lang {
            Language::Chinese => format!(
                "{}{}月{}",
                if leap { "闰" } else { "" },
                CHINESE_MONTHS[usize::from(m - 1) % 12],
                chinese_day(d)
            ),
            Language::English => format!(
                "{}Month {m}, Day {d}",
                if leap { "Leap " } else { "" }
            ),
            Language::Vietnamese => format!(
                "Ngày {d} tháng {m}{}",
                if leap { " (nhuận)" } else { "" }
            ),
        }
    }

    /// String-only view for display and JSON output.
    pub fn render(&self, lang: Language) -> LunisolarView {
        let pillar = |g: GanZhi| PillarView {
            stem: g.stem().label(lang),
            branch: g.branch().label(lang),
            cycle: g.cycle(),
            label: g.label(lang),
        };
        LunisolarView {
            solar: self.solar.to_string(),
            utc_offset_seconds: self.utc_offset_seconds,
            lunar_year: self.lunar_year,
            lunar_month: self.lunar_month,
            lunar_day: self.lunar_day,
            is_leap_month: self.is_leap_month,
            date_label: self.date_label(lang),
            year: pillar(self.pillars.year),
            month: pillar(self.pillars.month),
            day: pillar(self.pillars.day),
            hour: pillar(self.pillars.hour),
            construction_star: self.huangdao.star.label(lang),
            path_spirit: self.huangdao.spirit.label(lang),
            path: self.huangdao.path.label(lang),
        }
    }
}

/// Stem, branch and cycle of one pillar, as labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarView {
    pub stem: &'static str,
    pub branch: &'static str,
    pub cycle: u8,
    pub label: String,
}

/// Rendered [`LunisolarDate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LunisolarView {
    pub solar: String,
    pub utc_offset_seconds: i64,
    pub lunar_year: i32,
    pub lunar_month: u8,
    pub lunar_day: u8,
    pub is_leap_month: bool,
    pub date_label: String,
    pub year: PillarView,
    pub month: PillarView,
    pub day: PillarView,
    pub hour: PillarView,
    pub construction_star: &'static str,
    pub path_spirit: &'static str,
    pub path: &'static str,
}

const CHINESE_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
const CHINESE_DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

fn chinese_day(day: u8) -> String {
    match day {
        1..=10 => format!("初{}", CHINESE_DIGITS[usize::from(day % 10)]),
        11..=19 => format!("十{}", CHINESE_DIGITS[usize::from(day % 10)]),
        20 => "二十".to_string(),
        21..=29 => format!("廿{}", CHINESE_DIGITS[usize::from(day % 10)]),
        _ => "三十".to_string(),
    }
}

/// Gregorian year a month period belongs to.
///
/// Months 1..=11 take the UTC year of the period start. Month 12 belongs to the
/// previous year when its period starts in January or February.
fn lunar_year_of(period: &MonthPeriod) -> i32 {
    let start = period.start.decompose(0).date;
    if period.month == 12 && start.month <= 2 {
        start.year - 1
    } else {
        start.year
    }
}

/// Convert one instant using precomputed events.
///
/// `new_moons` need not be sorted. `solar_terms` may hold all 24 terms; only
/// principal terms are used. Results are deterministic for equal inputs.
pub fn convert(
    instant: UnixTime,
    offset_seconds: i64,
    new_moons: &[UnixTime],
    solar_terms: &[SolarTermEvent],
) -> Result<LunisolarDate, CalendarError> {
    let table = MonthTable::assemble(new_moons, solar_terms, instant, offset_seconds)?;
    resolve(&table, instant)
}

/// Convert one instant using a precomputed [`EventWindow`].
pub fn convert_in_window(
    instant: UnixTime,
    offset_seconds: i64,
    window: &EventWindow,
) -> Result<LunisolarDate, CalendarError> {
    convert(instant, offset_seconds, &window.new_moons, &window.solar_terms)
}

/// Search events for the query's local year ± the configured margin, then convert.
pub fn convert_with_oracle<O>(
    instant: UnixTime,
    offset_seconds: i64,
    oracle: &O,
    config: &CalendarConfig,
) -> Result<LunisolarDate, CalendarError>
where
    O: LongitudeOracle + ?Sized,
{
    config.validate().map_err(CalendarError::InvalidConfig)?;
    let year = instant.decompose(offset_seconds).date.year;
    let margin = config.window_margin_years as i32;
    let (start_year, end_year) = (year - margin, year + margin);
    let window = compute_window(
        oracle,
        start_year,
        end_year,
        &config.search_for(start_year, end_year),
    )?;
    convert_in_window(instant, offset_seconds, &window)
}

/// Convert every civil day of `start..=end`, each taken at 12:00 local time.
///
/// One event window covers the whole range. An empty list is returned when
/// `start` is after `end`.
pub fn convert_range<O>(
    start: CivilDate,
    end: CivilDate,
    offset_seconds: i64,
    oracle: &O,
    config: &CalendarConfig,
) -> Result<Vec<LunisolarDate>, CalendarError>
where
    O: LongitudeOracle + ?Sized,
{
    config.validate().map_err(CalendarError::InvalidConfig)?;
    if start > end {
        return Ok(Vec::new());
    }
    let first = start.day_number();
    let days = (end.day_number() - first + 1) as usize;
    if days > config.max_range_days {
        return Err(CalendarError::ResultBufferTooSmall {
            needed: days,
            capacity: config.max_range_days,
        });
    }

    let margin = config.window_margin_years as i32;
    let (start_year, end_year) = (start.year - margin, end.year + margin);
    let window = compute_window(
        oracle,
        start_year,
        end_year,
        &config.search_for(start_year, end_year),
    )?;
    debug!(%start, %end, days, "converting date range");

    (first..first + days as i64)
        .map(|day| {
            let noon = UnixTime::from_seconds((day * 86_400 + 43_200 - offset_seconds) as f64);
            convert_in_window(noon, offset_seconds, &window)
        })
        .collect()
}

fn resolve(table: &MonthTable, instant: UnixTime) -> Result<LunisolarDate, CalendarError> {
    let offset = table.offset_seconds();
    let (period, lunar_day) = table.locate(instant)?;
    let local = instant.decompose(offset);

    let lunar_year = lunar_year_of(period);
    let year = year_pillar(lunar_year);
    let day = day_pillar(instant.local_day_number(offset));
    let pillars = SexagenaryPillars {
        year,
        month: month_pillar(year, period.month),
        day,
        hour: hour_pillar(day, local.hour, local.minute),
    };

    Ok(LunisolarDate {
        lunar_year,
        lunar_month: period.month,
        lunar_day,
        is_leap_month: period.leap,
        pillars,
        huangdao: HuangdaoDay::new(period.month, day.branch()),
        solar: local,
        utc_offset_seconds: offset,
    })
}
