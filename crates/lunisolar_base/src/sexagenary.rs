//! The 60-term sexagenary cycle (六十甲子).
//!
//! Cycle numbers are 1-based: 1 = 甲子, 60 = 癸亥. A stem and branch pair
//! only when their indices share parity, which gives exactly 60 positions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::error::LookupError;
use crate::language::Language;
use crate::stem::HeavenlyStem;

/// A stem-branch pair that is a position of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GanZhi {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

/// Cycle number (1..=60) for 0-based stem and branch indices.
///
/// `None` when either index is out of range or their parities differ.
pub const fn cycle_from(stem: u8, branch: u8) -> Option<u8> {
    if stem >= 10 || branch >= 12 || stem % 2 != branch % 2 {
        return None;
    }
    // c ≡ stem + 5·(stem − branch) (mod 10) and c ≡ branch + 6·(stem − branch)
    // (mod 12); stem − branch is even, so both extra terms vanish.
    let c = (6 * stem as i32 - 5 * branch as i32).rem_euclid(60);
    Some(c as u8 + 1)
}

impl GanZhi {
    /// Pair a stem and branch; fails on a parity mismatch.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, LookupError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(LookupError::ParityMismatch {
                stem: stem.index(),
                branch: branch.index(),
            });
        }
        Ok(Self { stem, branch })
    }

    /// Pair from raw 0-based indices.
    pub fn from_indices(stem: u8, branch: u8) -> Result<Self, LookupError> {
        Self::new(HeavenlyStem::try_from(stem)?, EarthlyBranch::try_from(branch)?)
    }

    /// Position for a 1-based cycle number.
    pub const fn from_cycle(cycle: u8) -> Result<Self, LookupError> {
        if cycle == 0 || cycle > 60 {
            return Err(LookupError::CycleOutOfRange(cycle));
        }
        Ok(Self::from_offset((cycle - 1) as i64))
    }

    /// Position for any 0-based offset, wrapping modulo 60.
    pub const fn from_offset(offset: i64) -> Self {
        Self {
            stem: HeavenlyStem::wrapping(offset),
            branch: EarthlyBranch::wrapping(offset),
        }
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// 1-based cycle number.
    pub const fn cycle(self) -> u8 {
        // Parity is enforced at construction.
        let c = (6 * self.stem.index() as i32 - 5 * self.branch.index() as i32).rem_euclid(60);
        c as u8 + 1
    }

    /// The position `n` steps later (negative steps go back).
    pub const fn offset(self, n: i64) -> Self {
        Self::from_offset(self.cycle() as i64 - 1 + n)
    }

    /// Decade (旬) index 0..=5: which group of ten the position falls in.
    pub const fn xun(self) -> u8 {
        (self.cycle() - 1) / 10
    }

    /// The two void (空亡) branches of this position's decade.
    pub const fn void_branches(self) -> [EarthlyBranch; 2] {
        let first = 10 - 2 * self.xun() as i64;
        [
            EarthlyBranch::wrapping(first),
            EarthlyBranch::wrapping(first + 1),
        ]
    }

    /// Stem and branch labels joined for the language.
    pub fn label(self, lang: Language) -> String {
        format!(
            "{}{}{}",
            self.stem.label(lang),
            lang.pillar_separator(),
            self.branch.label(lang)
        )
    }
}

impl Display for GanZhi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// Parses `甲子`, `Jia Zi`, `jia-zi`, `Giáp Tý`, or a bare cycle number `1`..`60`.
impl FromStr for GanZhi {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(cycle) = s.parse::<u8>() {
            return Self::from_cycle(cycle);
        }
        let (stem, branch) = split_pair(s)?;
        Self::new(stem.parse()?, branch.parse()?)
    }
}

/// Split a pillar label into its stem and branch halves.
pub fn split_pair(s: &str) -> Result<(&str, &str), LookupError> {
    let s = s.trim();
    if let Some((a, b)) = s.split_once([' ', '-', '_']) {
        return Ok((a, b.trim()));
    }
    let mut chars = s.char_indices();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(_), Some((i, _)), None) => Ok((&s[..i], &s[i..])),
        _ => Err(LookupError::UnknownLabel(s.to_string())),
    }
}
