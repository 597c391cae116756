//! Day Master strength (身强身弱) and rooting (通根).

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, Element, ElementRelation, Language, element_relation};

use crate::chart::{ALL_POSITIONS, FourPillars, PillarPosition};
use crate::interactions::{BranchInteraction, InteractionKind, TrioCombination, TrioKind};

use EarthlyBranch::*;

/// Weight of each pillar, in [`ALL_POSITIONS`] order. The Month commands the season.
pub const PILLAR_WEIGHTS: [f64; 4] = [1.0, 3.0, 1.5, 1.0];

/// 禄 (Lu) branch of each stem, by stem index.
pub const JIAN_LU_BRANCHES: [EarthlyBranch; 10] = [Yin, Mao, Si, Wu, Si, Wu, Shen, You, Hai, Zi];

/// 羊刃 (Goat Blade) branch of each stem, by stem index.
pub const GOAT_BLADE_BRANCHES: [EarthlyBranch; 10] =
    [Mao, Chen, Wu, Wei, Wu, Wei, You, Xu, Zi, Chou];

// Per hidden-stem role: main, middle, residual.
const SAME_ELEMENT_HIDDEN: [f64; 3] = [2.0, 1.0, 0.5];
const RESOURCE_HIDDEN: [f64; 3] = [1.2, 0.6, 0.3];
const ROOT_WEIGHTS: [f64; 3] = [1.0, 0.6, 0.3];

const SAME_ELEMENT_STEM: f64 = 1.0;
const RESOURCE_STEM: f64 = 0.6;
const TRIO_SAME_BONUS: f64 = 3.0;
const TRIO_RESOURCE_BONUS: f64 = 1.5;
const MONTH_CLASH_PENALTY: f64 = 2.0;

const fn weight(position: PillarPosition) -> f64 {
    PILLAR_WEIGHTS[position.index()]
}

/// The Month branch is the Day Master's own 禄.
pub fn is_jian_lu(chart: &FourPillars) -> bool {
    JIAN_LU_BRANCHES[chart.day_master().index() as usize] == chart.month().branch
}

/// The Month branch is the Day Master's 羊刃.
pub fn is_yang_ren(chart: &FourPillars) -> bool {
    GOAT_BLADE_BRANCHES[chart.day_master().index() as usize] == chart.month().branch
}

/// Seasonal strength of the Day Master element in the Month element
/// (旺相休囚死): +2 same or resourced, -1 draining or spending, -2 controlled.
pub const fn seasonal_strength(day_master: Element, month: Element) -> i8 {
    match element_relation(day_master, month) {
        ElementRelation::Same | ElementRelation::Generates => 2,
        ElementRelation::GeneratedBy | ElementRelation::Controls => -1,
        ElementRelation::ControlledBy => -2,
    }
}

// ---------------------------------------------------------------------------
// Rooting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HiddenRole {
    Main,
    Middle,
    Residual,
}

impl HiddenRole {
    const fn from_slot(slot: usize) -> Self {
        match slot {
            0 => Self::Main,
            1 => Self::Middle,
            _ => Self::Residual,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// A hidden stem sharing the Day Master's element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Root {
    pub position: PillarPosition,
    pub branch: EarthlyBranch,
    pub role: HiddenRole,
    /// Same stem as the Day Master, not just the same element.
    pub same_stem: bool,
    /// Role weight times pillar weight.
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RootClass {
    Strong,
    Moderate,
    Weak,
    Unrooted,
}

impl RootClass {
    /// 4 and above is strong, 2 and above moderate.
    pub fn from_total(total: f64) -> Self {
        if total >= 4.0 {
            Self::Strong
        } else if total >= 2.0 {
            Self::Moderate
        } else if total > 0.0 {
            Self::Weak
        } else {
            Self::Unrooted
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Strong, Language::Chinese) => "强根",
            (Self::Moderate, Language::Chinese) => "中根",
            (Self::Weak, Language::Chinese) => "弱根",
            (Self::Unrooted, Language::Chinese) => "无根",
            (Self::Strong, Language::English) => "Strong root",
            (Self::Moderate, Language::English) => "Moderate root",
            (Self::Weak, Language::English) => "Weak root",
            (Self::Unrooted, Language::English) => "Unrooted",
            (Self::Strong, Language::Vietnamese) => "Gốc mạnh",
            (Self::Moderate, Language::Vietnamese) => "Gốc vừa",
            (Self::Weak, Language::Vietnamese) => "Gốc yếu",
            (Self::Unrooted, Language::Vietnamese) => "Không gốc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMasterRooting {
    pub roots: Vec<Root>,
    pub total: f64,
    pub class: RootClass,
    pub main_roots: usize,
    /// Middle and residual roots together.
    pub minor_roots: usize,
    pub jian_lu: bool,
    pub yang_ren: bool,
}

/// Hidden stems of the Day Master's element across all four branches.
pub fn analyze_rooting(chart: &FourPillars) -> DayMasterRooting {
    let dm = chart.day_master();
    let roots: Vec<Root> = chart
        .iter()
        .flat_map(|(position, p)| {
            p.branch
                .hidden_stems()
                .iter()
                .enumerate()
                .filter(move |(_, s)| s.element() == dm.element())
                .map(move |(slot, &s)| {
                    let role = HiddenRole::from_slot(slot);
                    Root {
                        position,
                        branch: p.branch,
                        role,
                        same_stem: s == dm,
                        weight: ROOT_WEIGHTS[role.slot()] * weight(position),
                    }
                })
        })
        .collect();
    let total = roots.iter().map(|r| r.weight).sum();
    let main_roots = roots.iter().filter(|r| r.role == HiddenRole::Main).count();
    DayMasterRooting {
        minor_roots: roots.len() - main_roots,
        main_roots,
        class: RootClass::from_total(total),
        total,
        roots,
        jian_lu: is_jian_lu(chart),
        yang_ren: is_yang_ren(chart),
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DayMasterStrength {
    ExtremeWeak,
    Weak,
    Balanced,
    Strong,
    ExtremeStrong,
}

impl DayMasterStrength {
    /// At least 10 is extreme, at least 6 strong; mirrored at -6 and -3.
    pub fn from_score(score: f64) -> Self {
        if score >= 10.0 {
            Self::ExtremeStrong
        } else if score >= 6.0 {
            Self::Strong
        } else if score <= -6.0 {
            Self::ExtremeWeak
        } else if score <= -3.0 {
            Self::Weak
        } else {
            Self::Balanced
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::ExtremeStrong, Language::Chinese) => "极强",
            (Self::Strong, Language::Chinese) => "身强",
            (Self::Balanced, Language::Chinese) => "中和",
            (Self::Weak, Language::Chinese) => "身弱",
            (Self::ExtremeWeak, Language::Chinese) => "极弱",
            (Self::ExtremeStrong, Language::English) => "Extremely strong",
            (Self::Strong, Language::English) => "Strong",
            (Self::Balanced, Language::English) => "Balanced",
            (Self::Weak, Language::English) => "Weak",
            (Self::ExtremeWeak, Language::English) => "Extremely weak",
            (Self::ExtremeStrong, Language::Vietnamese) => "Cực vượng",
            (Self::Strong, Language::Vietnamese) => "Thân vượng",
            (Self::Balanced, Language::Vietnamese) => "Trung hòa",
            (Self::Weak, Language::Vietnamese) => "Thân nhược",
            (Self::ExtremeWeak, Language::Vietnamese) => "Cực nhược",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayMasterScore {
    pub score: f64,
    pub strength: DayMasterStrength,
    /// Raw seasonal value before the Month weight.
    pub seasonal: i8,
    pub jian_lu: bool,
}

/// Natal score from season, hidden stems and visible stems alone.
pub fn score_day_master(chart: &FourPillars) -> DayMasterScore {
    let dm = chart.day_master().element();
    let roots: f64 = chart
        .iter()
        .flat_map(|(position, p)| {
            p.branch
                .hidden_stems()
                .iter()
                .enumerate()
                .filter(move |(_, s)| s.element() == dm)
                .map(move |(slot, _)| SAME_ELEMENT_HIDDEN[slot.min(2)] * weight(position))
        })
        .sum();
    score_with_roots(chart, roots, &[], &[])
}

/// Score using precomputed rooting plus three-branch frames and clashes.
///
/// A Three Harmony or Directional frame of the Day Master's element adds 3,
/// one of its resource element 1.5. Each six clash on the Month branch
/// subtracts 2.
pub fn score_day_master_with(
    chart: &FourPillars,
    rooting: &DayMasterRooting,
    trios: &[TrioCombination],
    interactions: &[BranchInteraction],
) -> DayMasterScore {
    score_with_roots(chart, rooting.total, trios, interactions)
}

fn score_with_roots(
    chart: &FourPillars,
    roots: f64,
    trios: &[TrioCombination],
    interactions: &[BranchInteraction],
) -> DayMasterScore {
    let dm = chart.day_master().element();
    let resource = resource_of(dm);
    let month_branch = chart.month().branch;
    let seasonal = seasonal_strength(dm, month_branch.element());

    let mut score = f64::from(seasonal) * weight(PillarPosition::Month) + roots;

    for position in ALL_POSITIONS {
        let p = chart[position];
        let w = weight(position);
        for (slot, s) in p.branch.hidden_stems().iter().enumerate() {
            if s.element() == resource {
                score += RESOURCE_HIDDEN[slot.min(2)] * w;
            }
        }
        let e = p.stem.element();
        if e == dm {
            score += SAME_ELEMENT_STEM * w;
        } else if e == resource {
            score += RESOURCE_STEM * w;
        }
    }

    for trio in trios {
        if !matches!(trio.kind, TrioKind::ThreeHarmony | TrioKind::Directional) {
            continue;
        }
        if trio.element == dm {
            score += TRIO_SAME_BONUS;
        } else if trio.element == resource {
            score += TRIO_RESOURCE_BONUS;
        }
    }

    let month_clashes = interactions
        .iter()
        .filter(|i| i.kind == InteractionKind::SixClash)
        .filter(|i| i.branches.0 == month_branch || i.branches.1 == month_branch)
        .count();
    score -= MONTH_CLASH_PENALTY * month_clashes as f64;

    DayMasterScore {
        score,
        strength: DayMasterStrength::from_score(score),
        seasonal,
        jian_lu: is_jian_lu(chart),
    }
}

/// The element that generates `element`.
const fn resource_of(element: Element) -> Element {
    element.generates().generates().generates().generates()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::{detect_branch_interactions, detect_trio_combinations};

    fn chart(s: &str) -> FourPillars {
        s.parse().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn seasonal_cases() {
        use Element::*;
        // Same element (旺).
        assert_eq!(seasonal_strength(Wood, Wood), 2);
        // Month resources the Day Master (相).
        assert_eq!(seasonal_strength(Wood, Water), 2);
        // Day Master feeds the month (休).
        assert_eq!(seasonal_strength(Wood, Fire), -1);
        // Day Master controls the month (囚).
        assert_eq!(seasonal_strength(Wood, Earth), -1);
        // Month controls the Day Master (死).
        assert_eq!(seasonal_strength(Wood, Metal), -2);
        assert_eq!(seasonal_strength(Earth, Wood), -2);
    }

    #[test]
    fn resource_element() {
        assert_eq!(resource_of(Element::Earth), Element::Fire);
        assert_eq!(resource_of(Element::Wood), Element::Water);
    }

    #[test]
    fn jian_lu_only_in_month() {
        assert!(is_jian_lu(&chart("甲子,丙寅,甲子,甲子")));
        assert!(!is_jian_lu(&chart("丙寅,丙子,甲子,丙寅")));
        assert!(is_jian_lu(&chart("甲子,己巳,戊辰,庚申")));
        assert!(is_yang_ren(&chart("甲子,丁卯,甲子,甲子")));
    }

    #[test]
    fn strength_tiers() {
        use DayMasterStrength::*;
        assert_eq!(DayMasterStrength::from_score(10.0), ExtremeStrong);
        assert_eq!(DayMasterStrength::from_score(9.9), Strong);
        assert_eq!(DayMasterStrength::from_score(6.0), Strong);
        assert_eq!(DayMasterStrength::from_score(5.9), Balanced);
        assert_eq!(DayMasterStrength::from_score(-2.9), Balanced);
        assert_eq!(DayMasterStrength::from_score(-3.0), Weak);
        assert_eq!(DayMasterStrength::from_score(-5.9), Weak);
        assert_eq!(DayMasterStrength::from_score(-6.0), ExtremeWeak);
    }

    #[test]
    fn natal_score_of_earth_master_in_spring() {
        // 戊 in a 寅 month: -6 season, +5 Earth hidden, +1.8 丙 in 寅, +3.3 visible.
        let s = score_day_master(&chart("甲子,丙寅,戊辰,庚申"));
        assert_eq!(s.seasonal, -2);
        assert!(close(s.score, 4.1), "{}", s.score);
        assert_eq!(s.strength, DayMasterStrength::Balanced);
        assert!(!s.jian_lu);
    }

    #[test]
    fn wood_master_in_wood_month_is_extreme() {
        let s = score_day_master(&chart("甲寅,丙寅,甲寅,甲寅"));
        assert!(close(s.score, 22.5), "{}", s.score);
        assert_eq!(s.strength, DayMasterStrength::ExtremeStrong);
        assert!(s.jian_lu);
    }

    #[test]
    fn wood_master_in_metal_month_is_weak() {
        let s = score_day_master(&chart("辛酉,辛酉,乙酉,辛巳"));
        assert!(close(s.score, -4.5), "{}", s.score);
        assert_eq!(s.strength, DayMasterStrength::Weak);
    }

    #[test]
    fn rooting_weights() {
        let r = analyze_rooting(&chart("甲子,丙寅,戊辰,庚申"));
        assert_eq!(r.roots.len(), 3);
        assert_eq!(r.main_roots, 1);
        assert_eq!(r.minor_roots, 2);
        assert!(close(r.total, 2.7), "{}", r.total);
        assert_eq!(r.class, RootClass::Moderate);
        assert_eq!(r.roots[1].position, PillarPosition::Day);
        assert!(r.roots[1].same_stem);
        assert!(!r.jian_lu && !r.yang_ren);

        let bare = analyze_rooting(&chart("辛酉,辛酉,乙酉,辛巳"));
        assert!(bare.roots.is_empty());
        assert_eq!(bare.class, RootClass::Unrooted);
    }

    #[test]
    fn interactions_adjust_score() {
        let c = chart("甲子,丙寅,戊辰,庚申");
        let rooting = analyze_rooting(&c);
        let trios = detect_trio_combinations(&c);
        let interactions = detect_branch_interactions(&c);
        // Water frame adds nothing for Earth; 寅申 clash costs 2.
        let s = score_day_master_with(&c, &rooting, &trios, &interactions);
        assert!(close(s.score, -6.0 + 2.7 + 1.8 + 3.3 - 2.0), "{}", s.score);
        assert_eq!(s.strength, DayMasterStrength::Balanced);

        // 寅午戌 Fire frame resources an Earth Day Master.
        let fire = chart("戊寅,戊午,戊戌,戊午");
        let base = score_day_master_with(&fire, &analyze_rooting(&fire), &[], &[]);
        let framed = score_day_master_with(
            &fire,
            &analyze_rooting(&fire),
            &detect_trio_combinations(&fire),
            &[],
        );
        assert!(close(framed.score - base.score, TRIO_RESOURCE_BONUS));
    }
}
