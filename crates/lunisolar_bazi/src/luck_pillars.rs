//! Luck pillars (大运): ten-year pillars stepping away from the Month pillar.
//!
//! Direction follows the Year stem's polarity and the subject's gender. The
//! first pillar starts at an age fixed by the distance from birth to the
//! governing sectional term (节), three days counting as one year.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use lunisolar_base::{
    EarthlyBranch, HeavenlyStem, Language, LongevityStage, NaYin, Polarity, TenGod,
    longevity_stage, ten_god,
};
use lunisolar_search::SolarTermEvent;
use lunisolar_time::UnixTime;

use crate::chart::{FourPillars, Pillar};
use crate::error::BaziError;

/// Luck pillars produced when the caller does not ask for a count.
pub const DEFAULT_LUCK_PILLARS: usize = 8;

/// How far from birth the governing sectional term is looked for.
pub const JIE_SEARCH_DAYS: f64 = 35.0;

/// Each luck pillar governs ten years.
const MONTHS_PER_PILLAR: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Male, Language::Chinese) => "男",
            (Self::Female, Language::Chinese) => "女",
            (Self::Male, Language::English) => "Male",
            (Self::Female, Language::English) => "Female",
            (Self::Male, Language::Vietnamese) => "Nam",
            (Self::Female, Language::Vietnamese) => "Nữ",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

/// Accepts English, Chinese and Vietnamese labels, plus `m`/`f`.
impl FromStr for Gender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" | "nam" => Ok(Self::Male),
            "female" | "f" | "女" | "nữ" | "nu" => Ok(Self::Female),
            _ => Err(BaziError::Gender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LuckDirection {
    /// 顺行: later cycle positions.
    Forward,
    /// 逆行: earlier cycle positions.
    Backward,
}

impl LuckDirection {
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Forward, Language::Chinese) => "顺行",
            (Self::Backward, Language::Chinese) => "逆行",
            (Self::Forward, Language::English) => "Forward",
            (Self::Backward, Language::English) => "Backward",
            (Self::Forward, Language::Vietnamese) => "Thuận",
            (Self::Backward, Language::Vietnamese) => "Nghịch",
        }
    }
}

/// Yang year with a male subject, or Yin year with a female one, runs forward.
pub const fn luck_direction(chart: &FourPillars, gender: Gender) -> LuckDirection {
    match (chart.year().stem.polarity(), gender) {
        (Polarity::Yang, Gender::Male) | (Polarity::Yin, Gender::Female) => {
            LuckDirection::Forward
        }
        _ => LuckDirection::Backward,
    }
}

/// An age in whole years and months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LuckAge {
    pub years: u32,
    pub months: u32,
}

impl LuckAge {
    pub const fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }

    pub const fn from_months(total: u32) -> Self {
        Self::new(total / 12, total % 12)
    }

    pub const fn total_months(self) -> u32 {
        self.years * 12 + self.months
    }
}

impl Display for LuckAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}y{}m", self.years, self.months)
    }
}

/// Age at which the first luck pillar begins.
///
/// Both arguments are local day numbers. One day between birth and the
/// governing term counts as four months.
pub const fn luck_start_age(birth_day: i64, jie_day: i64) -> LuckAge {
    LuckAge::from_months((birth_day.abs_diff(jie_day) * 4) as u32)
}

/// The sectional term that fixes the start age.
///
/// Forward luck takes the first sectional term at or after birth, backward
/// luck the last one at or before it. Only terms within [`JIE_SEARCH_DAYS`]
/// of birth qualify; principal terms are ignored.
pub fn find_governing_jie_term(
    terms: &[SolarTermEvent],
    birth: UnixTime,
    direction: LuckDirection,
) -> Option<SolarTermEvent> {
    let limit = JIE_SEARCH_DAYS * 86_400.0;
    let sign = direction.step() as f64;
    terms
        .iter()
        .filter(|e| !e.term.is_principal())
        .map(|e| (sign * (e.time.as_seconds() - birth.as_seconds()), e))
        .filter(|(gap, _)| (0.0..=limit).contains(gap))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, e)| *e)
}

/// What is known about when the luck pillars begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LuckStart {
    /// Pillars carry no ages.
    Unknown,
    /// Only the birth year: the first pillar starts at age 1.
    BirthYear(i32),
    /// Birth year and the computed start age.
    Age { birth_year: i32, age: LuckAge },
}

impl LuckStart {
    fn first_age(self) -> Option<LuckAge> {
        match self {
            Self::Unknown => None,
            Self::BirthYear(_) => Some(LuckAge::new(1, 0)),
            Self::Age { age, .. } => Some(age),
        }
    }

    fn birth_year(self) -> Option<i32> {
        match self {
            Self::Unknown => None,
            Self::BirthYear(year) | Self::Age { birth_year: year, .. } => Some(year),
        }
    }
}

/// Start information for a birth instant, from precomputed solar terms.
///
/// Falls back to [`LuckStart::BirthYear`] when no sectional term lies within
/// reach of birth in the luck direction.
pub fn luck_start_from_terms(
    chart: &FourPillars,
    gender: Gender,
    terms: &[SolarTermEvent],
    birth: UnixTime,
    offset_seconds: i64,
) -> LuckStart {
    let birth_year = birth.local_date(offset_seconds).year;
    match find_governing_jie_term(terms, birth, luck_direction(chart, gender)) {
        Some(jie) => LuckStart::Age {
            birth_year,
            age: luck_start_age(
                birth.local_day_number(offset_seconds),
                jie.time.local_day_number(offset_seconds),
            ),
        },
        None => LuckStart::BirthYear(birth_year),
    }
}

/// One ten-year luck pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LuckPillar {
    /// 0-based; pillar 0 is one step from the Month pillar.
    pub index: usize,
    pub pillar: Pillar,
    pub ten_god: TenGod,
    /// Day Master's stage in the pillar's branch.
    pub longevity: LongevityStage,
    pub na_yin: Option<&'static NaYin>,
    pub start_age: Option<LuckAge>,
    /// Gregorian year the pillar begins.
    pub start_year: Option<i32>,
}

/// `count` luck pillars stepping from the Month pillar.
///
/// Stem and branch step separately, so a Month pillar of mismatched parity
/// still yields a sequence.
pub fn generate_luck_pillars(
    chart: &FourPillars,
    gender: Gender,
    count: usize,
    start: LuckStart,
) -> Vec<LuckPillar> {
    let dm = chart.day_master();
    let step = luck_direction(chart, gender).step();
    let month = chart.month();
    let first_age = start.first_age();
    let birth_year = start.birth_year();

    (0..count)
        .map(|index| {
            let n = step * (index as i64 + 1);
            let pillar = Pillar::new(
                HeavenlyStem::wrapping(month.stem.index() as i64 + n),
                EarthlyBranch::wrapping(month.branch.index() as i64 + n),
            );
            let start_age = first_age
                .map(|a| LuckAge::from_months(a.total_months() + MONTHS_PER_PILLAR * index as u32));
            LuckPillar {
                index,
                pillar,
                ten_god: ten_god(dm, pillar.stem),
                longevity: longevity_stage(dm, pillar.branch),
                na_yin: pillar.ganzhi().map(|g| g.na_yin()),
                start_age,
                start_year: birth_year
                    .zip(start_age)
                    .map(|(year, age)| year + age.years as i32),
            }
        })
        .collect()
}
