//! Heavenly Stem combinations (天干合) and transformations (合化).
//!
//! Two stems of one of the five canonical pairs combine toward a target
//! element. Whether the combination actually transforms depends on:
//! - proximity: adjacent pillars score 2, others 1
//! - month support: the month branch carries the target element
//! - a leading stem: the target element shows as another pillar's stem, or
//!   as any hidden stem of any branch
//! - obstruction: for non-adjacent pairs, a stem between them controls
//!   either combining stem's element
//! - severe clash: a stem controls the target element and sits in the
//!   month pillar or has the opposite polarity to the Day Master

use std::fmt::{Display, Formatter};

use serde::Serialize;

use lunisolar_base::{Element, HeavenlyStem, Language, stem_combination};

use crate::chart::{FourPillars, PillarPosition};

/// Two pillars whose stems form a canonical combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemCombination {
    pub pair: (PillarPosition, PillarPosition),
    pub stems: (HeavenlyStem, HeavenlyStem),
    pub target_element: Element,
}

/// Outcome of a stem combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransformationStatus {
    /// Fully transformed into the target element.
    Successful,
    /// Combined but not transformed.
    Bound,
    /// Obstructed by an intervening stem.
    Blocked,
    /// Would have transformed but a clashing stem prevents it.
    SuppressedByClash,
}

impl TransformationStatus {
    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Successful, Language::Chinese) => "合化",
            (Self::Bound, Language::Chinese) => "合而不化",
            (Self::Blocked, Language::Chinese) => "合绊受阻",
            (Self::SuppressedByClash, Language::Chinese) => "化神受克",
            (Self::Successful, Language::English) => "transformed",
            (Self::Bound, Language::English) => "bound",
            (Self::Blocked, Language::English) => "blocked",
            (Self::SuppressedByClash, Language::English) => "suppressed by clash",
            (Self::Successful, Language::Vietnamese) => "Hóa (successful)",
            (Self::Bound, Language::Vietnamese) => "Hợp (bound)",
            (Self::Blocked, Language::Vietnamese) => "Blocked",
            (Self::SuppressedByClash, Language::Vietnamese) => "Hóa (suppressed by clash)",
        }
    }
}

impl Display for TransformationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

/// A scored stem combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transformation {
    pub pair: (PillarPosition, PillarPosition),
    pub stems: (HeavenlyStem, HeavenlyStem),
    pub target_element: Element,
    pub month_support: bool,
    pub leading_present: bool,
    pub blocked: bool,
    pub severely_clashed: bool,
    /// 2 for adjacent pillars, 1 otherwise.
    pub proximity_score: u8,
    pub status: TransformationStatus,
    /// 0..=100
    pub confidence: u8,
}

/// Stem combinations in pair order, lazily.
pub fn detect_stem_combinations_iter(
    chart: &FourPillars,
) -> impl Iterator<Item = StemCombination> + '_ {
    FourPillars::pairs().filter_map(move |(a, b)| {
        let stems = (chart[a].stem, chart[b].stem);
        stem_combination(stems.0, stems.1).map(|target_element| StemCombination {
            pair: (a, b),
            stems,
            target_element,
        })
    })
}

pub fn detect_stem_combinations(chart: &FourPillars) -> Vec<StemCombination> {
    detect_stem_combinations_iter(chart).collect()
}

/// Scored transformations in pair order, lazily.
///
/// Month support is judged against the chart's own month branch.
pub fn detect_transformations_iter(
    chart: &FourPillars,
) -> impl Iterator<Item = Transformation> + '_ {
    detect_stem_combinations_iter(chart).map(move |c| score(chart, c))
}

pub fn detect_transformations(chart: &FourPillars) -> Vec<Transformation> {
    detect_transformations_iter(chart).collect()
}

fn score(chart: &FourPillars, combo: StemCombination) -> Transformation {
    let (a, b) = combo.pair;
    let target = combo.target_element;

    let adjacent = a.is_adjacent(b);
    let proximity_score = if adjacent { 2 } else { 1 };
    let month_support = chart.month().branch.element() == target;
    let leading_present = has_leading_stem(chart, a, b, target);
    let blocked = is_obstructed(chart, a, b);
    let severely_clashed = is_severely_clashed(chart, target);

    let (mut status, mut confidence): (TransformationStatus, u8) =
        if adjacent && month_support && (leading_present || !severely_clashed) && !blocked {
            let c = if leading_present { 95 } else { 85 };
            (TransformationStatus::Successful, c)
        } else if (month_support || leading_present) && !blocked {
            (TransformationStatus::Bound, 65)
        } else if blocked {
            (TransformationStatus::Blocked, 10)
        } else {
            (TransformationStatus::Bound, 40)
        };

    if status == TransformationStatus::Successful && severely_clashed {
        status = TransformationStatus::SuppressedByClash;
        confidence = confidence.saturating_sub(30).max(20);
    }

    Transformation {
        pair: combo.pair,
        stems: combo.stems,
        target_element: target,
        month_support,
        leading_present,
        blocked,
        severely_clashed,
        proximity_score,
        status,
        confidence,
    }
}

/// Target element among the other pillars' stems, or any branch's hidden stems.
fn has_leading_stem(
    chart: &FourPillars,
    a: PillarPosition,
    b: PillarPosition,
    target: Element,
) -> bool {
    let visible = chart
        .iter()
        .filter(|&(pos, _)| pos != a && pos != b)
        .map(|(_, p)| p.stem);
    let hidden = chart
        .pillars()
        .iter()
        .flat_map(|p| p.branch.hidden_stems().iter().copied());
    visible.chain(hidden).any(|s| s.element() == target)
}

/// Only pairs with a pillar between them can be obstructed.
fn is_obstructed(chart: &FourPillars, a: PillarPosition, b: PillarPosition) -> bool {
    let (lo, hi) = (a.index().min(b.index()), a.index().max(b.index()));
    if hi - lo <= 1 {
        return false;
    }
    let e1 = chart[a].stem.element();
    let e2 = chart[b].stem.element();
    chart.pillars()[lo + 1..hi].iter().any(|mid| {
        let ctrl = mid.stem.element().controls();
        ctrl == e1 || ctrl == e2
    })
}

fn is_severely_clashed(chart: &FourPillars, target: Element) -> bool {
    let dm_polarity = chart.day_master().polarity();
    chart.iter().any(|(pos, p)| {
        p.stem.element().controls() == target
            && (pos == PillarPosition::Month || p.stem.polarity() != dm_polarity)
    })
}
