//! Lunar month assembly.
//!
//! Months run from one new moon to the next. A month containing a principal
//! solar term (by local date) is a regular month; one without is a leap
//! month. Numbering starts at the month holding the Winter Solstice, which is
//! always month 11, and runs outward from it in both directions.

use serde::Serialize;
use tracing::debug;

use lunisolar_search::{SolarTerm, SolarTermEvent};
use lunisolar_time::UnixTime;

use crate::error::CalendarError;

/// Month number of the period holding the Winter Solstice (子月).
pub const ZI_MONTH: u8 = 11;

/// Which part of the numbering walk assigned a period its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Assignment {
    /// The Winter Solstice month itself.
    Anchor,
    /// A period after the anchor.
    Forward,
    /// A period before the anchor.
    Backward,
}

/// One lunation: `[start, end)` between consecutive new moons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthPeriod {
    pub start: UnixTime,
    pub end: UnixTime,
    /// Local day number of `start`.
    pub start_day: i64,
    /// Local day number of `end` (exclusive).
    pub end_day: i64,
    pub has_principal: bool,
    /// Month number 1..=12.
    pub month: u8,
    pub leap: bool,
    pub assigned_by: Assignment,
}

impl MonthPeriod {
    /// Whether a local day number falls in `[start_day, end_day)`.
    pub fn contains_day(&self, day: i64) -> bool {
        self.start_day <= day && day < self.end_day
    }

    /// Whether an instant falls in `[start, end)`.
    pub fn contains_instant(&self, t: UnixTime) -> bool {
        self.start <= t && t < self.end
    }

    /// Length in local days (29 or 30 for real lunations).
    pub fn length_days(&self) -> i64 {
        self.end_day - self.start_day
    }
}

/// Numbered month periods for one event window and UTC offset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthTable {
    periods: Vec<MonthPeriod>,
    anchor_index: usize,
    anchor: UnixTime,
    offset_seconds: i64,
}

impl MonthTable {
    /// Build and number the month periods around the Winter Solstice that
    /// governs `query`.
    ///
    /// The governing solstice is the one in the query's local year if the
    /// query is at or after it, else the one in the previous year. When the
    /// exact year is missing from the data, the nearest solstice is used.
    pub fn assemble(
        new_moons: &[UnixTime],
        solar_terms: &[SolarTermEvent],
        query: UnixTime,
        offset_seconds: i64,
    ) -> Result<Self, CalendarError> {
        if new_moons.len() < 2 || solar_terms.is_empty() {
            return Err(CalendarError::InsufficientAstronomicalData);
        }

        let mut moons = new_moons.to_vec();
        moons.sort_by(|a, b| a.as_seconds().total_cmp(&b.as_seconds()));

        let mut principal: Vec<SolarTermEvent> = solar_terms
            .iter()
            .copied()
            .filter(|e| e.term.is_principal())
            .collect();
        principal.sort_by(|a, b| a.time.as_seconds().total_cmp(&b.time.as_seconds()));

        let mut periods: Vec<MonthPeriod> = moons
            .windows(2)
            .map(|w| MonthPeriod {
                start: w[0],
                end: w[1],
                start_day: w[0].local_day_number(offset_seconds),
                end_day: w[1].local_day_number(offset_seconds),
                has_principal: false,
                month: 0,
                leap: false,
                assigned_by: Assignment::Forward,
            })
            .collect();

        for term in &principal {
            let day = term.time.local_day_number(offset_seconds);
            if let Some(p) = periods.iter_mut().find(|p| p.contains_day(day)) {
                p.has_principal = true;
            }
        }

        let reference_year = query.decompose(offset_seconds).date.year;
        let anchor = select_anchor(&principal, query, reference_year)?;
        let anchor_index = periods
            .iter()
            .position(|p| p.contains_instant(anchor))
            .ok_or(CalendarError::NoAnchorFound)?;

        number_periods(&mut periods, anchor_index);

        debug!(
            %anchor,
            periods = periods.len(),
            anchor_index,
            "month table assembled"
        );

        Ok(Self {
            periods,
            anchor_index,
            anchor,
            offset_seconds,
        })
    }

    pub fn periods(&self) -> &[MonthPeriod] {
        &self.periods
    }

    /// The Winter Solstice instant the numbering is anchored on.
    pub fn anchor(&self) -> UnixTime {
        self.anchor
    }

    pub fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    /// The month 11 period holding the anchor.
    pub fn anchor_period(&self) -> &MonthPeriod {
        &self.periods[self.anchor_index]
    }

    pub fn offset_seconds(&self) -> i64 {
        self.offset_seconds
    }

    /// First period whose local date range holds `local_day`.
    pub fn period_for_day(&self, local_day: i64) -> Option<&MonthPeriod> {
        self.periods.iter().find(|p| p.contains_day(local_day))
    }

    /// Locate the period for `t` and its 1-based lunar day (clamped to 1..=30).
    pub fn locate(&self, t: UnixTime) -> Result<(&MonthPeriod, u8), CalendarError> {
        let day = t.local_day_number(self.offset_seconds);
        let period = self
            .period_for_day(day)
            .ok_or(CalendarError::DateOutOfPeriodRange)?;
        let lunar_day = (1 + day - period.start_day).clamp(1, 30) as u8;
        Ok((period, lunar_day))
    }
}

fn select_anchor(
    principal: &[SolarTermEvent],
    query: UnixTime,
    reference_year: i32,
) -> Result<UnixTime, CalendarError> {
    let solstices: Vec<UnixTime> = principal
        .iter()
        .filter(|e| e.term == SolarTerm::WinterSolstice)
        .map(|e| e.time)
        .collect();

    let in_year = |year: i32| solstices.iter().copied().find(|t| t.utc_year() == year);

    let current = in_year(reference_year)
        .or_else(|| {
            solstices
                .iter()
                .copied()
                .min_by_key(|t| (t.utc_year() - reference_year).unsigned_abs())
        })
        .ok_or(CalendarError::NoAnchorFound)?;

    if query >= current {
        Ok(current)
    } else {
        Ok(in_year(reference_year - 1).unwrap_or(current))
    }
}

#[derive(Clone, Copy)]
enum Walk {
    Forward,
    Backward,
}

/// Anchor is month 11. Walking forward, a principal term advances the month
/// and its absence repeats the number as a leap month. Walking backward the
/// month always steps down; periods without a principal term are leap.
fn number_periods(periods: &mut [MonthPeriod], anchor_index: usize) {
    let (before, rest) = periods.split_at_mut(anchor_index);
    let Some((anchor, after)) = rest.split_first_mut() else {
        return;
    };
    anchor.month = ZI_MONTH;
    anchor.leap = false;
    anchor.assigned_by = Assignment::Anchor;

    walk(after.iter_mut(), Walk::Forward);
    walk(before.iter_mut().rev(), Walk::Backward);
}

fn walk<'a>(periods: impl Iterator<Item = &'a mut MonthPeriod>, direction: Walk) {
    let mut month = ZI_MONTH;
    for p in periods {
        month = match direction {
            Walk::Forward if p.has_principal => month % 12 + 1,
            Walk::Forward => month,
            Walk::Backward if month > 1 => month - 1,
            Walk::Backward => 12,
        };
        p.month = month;
        p.leap = !p.has_principal;
        p.assigned_by = match direction {
            Walk::Forward => Assignment::Forward,
            Walk::Backward => Assignment::Backward,
        };
    }
}
