//! The four-pillar chart.

use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, GanZhi, HeavenlyStem, Language, LookupError};
use lunisolar_base::sexagenary::split_pair;

use crate::error::BaziError;

/// Pillar slot in a chart. The Day pillar holds the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 4 {
            Some(ALL_POSITIONS[index])
        } else {
            None
        }
    }

    /// Neighbouring slots (year-month, month-day, day-hour).
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.index().abs_diff(other.index()) == 1
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Year, Language::Chinese) => "年柱",
            (Self::Month, Language::Chinese) => "月柱",
            (Self::Day, Language::Chinese) => "日柱",
            (Self::Hour, Language::Chinese) => "时柱",
            (Self::Year, Language::English) => "Year",
            (Self::Month, Language::English) => "Month",
            (Self::Day, Language::English) => "Day",
            (Self::Hour, Language::English) => "Hour",
            (Self::Year, Language::Vietnamese) => "Trụ Năm",
            (Self::Month, Language::Vietnamese) => "Trụ Tháng",
            (Self::Day, Language::Vietnamese) => "Trụ Ngày",
            (Self::Hour, Language::Vietnamese) => "Trụ Giờ",
        }
    }
}

impl Display for PillarPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

/// A stem and branch.
///
/// Unlike [`GanZhi`], parity is not enforced: charts built from raw indices
/// are analysed as given, and only cycle-based lookups need a valid pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    pub fn from_indices(stem: u8, branch: u8) -> Result<Self, LookupError> {
        Ok(Self::new(
            HeavenlyStem::try_from(stem)?,
            EarthlyBranch::try_from(branch)?,
        ))
    }

    /// The cycle position, if stem and branch share parity.
    pub fn ganzhi(self) -> Option<GanZhi> {
        GanZhi::new(self.stem, self.branch).ok()
    }

    /// 1-based cycle number, if any.
    pub const fn cycle(self) -> Option<u8> {
        lunisolar_base::cycle_from(self.stem.index(), self.branch.index())
    }

    pub fn label(self, lang: Language) -> String {
        format!(
            "{}{}{}",
            self.stem.label(lang),
            lang.pillar_separator(),
            self.branch.label(lang)
        )
    }
}

impl From<GanZhi> for Pillar {
    fn from(g: GanZhi) -> Self {
        Self::new(g.stem(), g.branch())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Parses the same forms as [`GanZhi`] but accepts mismatched parity.
impl FromStr for Pillar {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(cycle) = s.parse::<u8>() {
            return GanZhi::from_cycle(cycle).map(Self::from);
        }
        let (stem, branch) = split_pair(s)?;
        Ok(Self::new(stem.parse()?, branch.parse()?))
    }
}

/// Year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pillars: [Pillar; 4],
}

impl FourPillars {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            pillars: [year, month, day, hour],
        }
    }

    /// From `(stem, branch)` indices in year, month, day, hour order.
    pub fn from_indices(raw: [(u8, u8); 4]) -> Result<Self, LookupError> {
        let [y, m, d, h] = raw;
        Ok(Self::new(
            Pillar::from_indices(y.0, y.1)?,
            Pillar::from_indices(m.0, m.1)?,
            Pillar::from_indices(d.0, d.1)?,
            Pillar::from_indices(h.0, h.1)?,
        ))
    }

    pub fn from_ganzhi(pillars: [GanZhi; 4]) -> Self {
        Self {
            pillars: pillars.map(Pillar::from),
        }
    }

    pub const fn pillars(&self) -> &[Pillar; 4] {
        &self.pillars
    }

    pub const fn year(&self) -> Pillar {
        self.pillars[0]
    }

    pub const fn month(&self) -> Pillar {
        self.pillars[1]
    }

    pub const fn day(&self) -> Pillar {
        self.pillars[2]
    }

    pub const fn hour(&self) -> Pillar {
        self.pillars[3]
    }

    /// The Day pillar's stem.
    pub const fn day_master(&self) -> HeavenlyStem {
        self.pillars[2].stem
    }

    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.into_iter().zip(self.pillars.iter().copied())
    }

    /// All six unordered position pairs: (Y,M), (Y,D), (Y,H), (M,D), (M,H), (D,H).
    pub fn pairs() -> impl Iterator<Item = (PillarPosition, PillarPosition)> {
        ALL_POSITIONS
            .into_iter()
            .enumerate()
            .flat_map(|(i, a)| ALL_POSITIONS.into_iter().skip(i + 1).map(move |b| (a, b)))
    }

    pub fn label(&self, lang: Language) -> String {
        self.pillars
            .iter()
            .map(|p| p.label(lang))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Index<PillarPosition> for FourPillars {
    type Output = Pillar;

    fn index(&self, position: PillarPosition) -> &Pillar {
        &self.pillars[position.index()]
    }
}

impl Display for FourPillars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(Language::Chinese))
    }
}

/// Parses four pillars separated by commas or whitespace, e.g. `甲子,丙寅,戊辰,庚申`.
impl FromStr for FourPillars {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).filter(|p| !p.is_empty()).collect()
        } else {
            s.split_whitespace().collect()
        };
        let [y, m, d, h] = parts.as_slice() else {
            return Err(BaziError::PillarCount(parts.len()));
        };
        Ok(Self::new(y.parse()?, m.parse()?, d.parse()?, h.parse()?))
    }
}
