//! Earthly Branch interactions: Six Combinations (六合), Six Clashes (六冲),
//! punishments (刑), harms (害), and three-branch combinations.

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, Element, Language};

use crate::chart::{FourPillars, PillarPosition};

use EarthlyBranch::{Chen, Chou, Hai, Mao, Shen, Si, Wei, Wu, Xu, Yin, You, Zi};

// ---------------------------------------------------------------------------
// Pair tables
// ---------------------------------------------------------------------------

#[rustfmt::skip]
pub const SIX_COMBINATIONS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Zi, Chou), (Yin, Hai), (Mao, Xu), (Chen, You), (Si, Shen), (Wu, Wei),
];

#[rustfmt::skip]
pub const SIX_CLASHES: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Zi, Wu), (Chou, Wei), (Yin, Shen), (Mao, You), (Chen, Xu), (Si, Hai),
];

#[rustfmt::skip]
pub const SIX_HARMS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Zi, Wei), (Chou, Wu), (Yin, Si), (Mao, Chen), (Shen, Hai), (You, Xu),
];

/// Branches that punish themselves when doubled.
pub const SELF_PUNISHING: [EarthlyBranch; 4] = [Chen, Wu, You, Hai];

pub const UNCIVIL_PUNISHMENTS: [(EarthlyBranch, EarthlyBranch); 1] = [(Zi, Mao)];

#[rustfmt::skip]
pub const BULLY_PUNISHMENTS: [(EarthlyBranch, EarthlyBranch); 6] = [
    (Yin, Si), (Si, Shen), (Yin, Shen),
    (Chou, Xu), (Xu, Wei), (Chou, Wei),
];

fn in_pairs(a: EarthlyBranch, b: EarthlyBranch, set: &[(EarthlyBranch, EarthlyBranch)]) -> bool {
    set.iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}

// ---------------------------------------------------------------------------
// Pair interactions
// ---------------------------------------------------------------------------

/// Kind of a two-branch interaction, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InteractionKind {
    SixCombination,
    SixClash,
    SelfPunishment,
    UncivilPunishment,
    BullyPunishment,
    Harm,
}

pub const ALL_INTERACTION_KINDS: [InteractionKind; 6] = [
    InteractionKind::SixCombination,
    InteractionKind::SixClash,
    InteractionKind::SelfPunishment,
    InteractionKind::UncivilPunishment,
    InteractionKind::BullyPunishment,
    InteractionKind::Harm,
];

impl InteractionKind {
    pub fn matches(self, a: EarthlyBranch, b: EarthlyBranch) -> bool {
        match self {
            Self::SixCombination => in_pairs(a, b, &SIX_COMBINATIONS),
            Self::SixClash => in_pairs(a, b, &SIX_CLASHES),
            Self::SelfPunishment => a == b && SELF_PUNISHING.contains(&a),
            Self::UncivilPunishment => in_pairs(a, b, &UNCIVIL_PUNISHMENTS),
            Self::BullyPunishment => in_pairs(a, b, &BULLY_PUNISHMENTS),
            Self::Harm => in_pairs(a, b, &SIX_HARMS),
        }
    }

    /// Punishments and harm; combinations and clashes are not.
    pub const fn is_punishment(self) -> bool {
        !matches!(self, Self::SixCombination | Self::SixClash)
    }

    /// Life areas a punishment or harm bears on.
    pub const fn life_areas(self) -> &'static [&'static str] {
        match self {
            Self::SixCombination | Self::SixClash => &[],
            Self::SelfPunishment => &["health", "self-sabotage"],
            Self::UncivilPunishment => &["relationship", "secrets"],
            Self::BullyPunishment => &["career", "power struggles"],
            Self::Harm => &["health", "relationship"],
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::SixCombination, Language::Chinese) => "六合",
            (Self::SixClash, Language::Chinese) => "六冲",
            (Self::SelfPunishment, Language::Chinese) => "自刑",
            (Self::UncivilPunishment, Language::Chinese) => "无礼之刑",
            (Self::BullyPunishment, Language::Chinese) => "恃势之刑",
            (Self::Harm, Language::Chinese) => "害",
            (Self::SixCombination, Language::English) => "Six Combination",
            (Self::SixClash, Language::English) => "Six Clash",
            (Self::SelfPunishment, Language::English) => "Self-punishment",
            (Self::UncivilPunishment, Language::English) => "Uncivil punishment",
            (Self::BullyPunishment, Language::English) => "Bully punishment",
            (Self::Harm, Language::English) => "Harm",
            (Self::SixCombination, Language::Vietnamese) => "Lục Hợp",
            (Self::SixClash, Language::Vietnamese) => "Lục Xung",
            (Self::SelfPunishment, Language::Vietnamese) => "Tự hình (Self-punish)",
            (Self::UncivilPunishment, Language::Vietnamese) => "Vô lễ chi hình (Uncivil)",
            (Self::BullyPunishment, Language::Vietnamese) => "Ỷ thế chi hình (Bully)",
            (Self::Harm, Language::Vietnamese) => "Hại (Harm)",
        }
    }
}

/// A detected interaction between two pillars' branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchInteraction {
    pub kind: InteractionKind,
    pub pair: (PillarPosition, PillarPosition),
    pub branches: (EarthlyBranch, EarthlyBranch),
    /// 80 with the Day pillar, else 70 with the Month pillar, else 50.
    pub severity: u8,
    pub life_areas: &'static [&'static str],
}

/// Severity of an interaction between two pillar positions.
pub fn pair_severity(a: PillarPosition, b: PillarPosition) -> u8 {
    let involves = |p| a == p || b == p;
    if involves(PillarPosition::Day) {
        80
    } else if involves(PillarPosition::Month) {
        70
    } else {
        50
    }
}

/// All pair interactions, lazily: pairs in chart order, kinds in
/// [`ALL_INTERACTION_KINDS`] order within a pair.
pub fn detect_branch_interactions_iter(
    chart: &FourPillars,
) -> impl Iterator<Item = BranchInteraction> + '_ {
    FourPillars::pairs().flat_map(move |(a, b)| {
        let branches = (chart[a].branch, chart[b].branch);
        let severity = pair_severity(a, b);
        ALL_INTERACTION_KINDS
            .into_iter()
            .filter(move |k| k.matches(branches.0, branches.1))
            .map(move |kind| BranchInteraction {
                kind,
                pair: (a, b),
                branches,
                severity,
                life_areas: kind.life_areas(),
            })
    })
}

pub fn detect_branch_interactions(chart: &FourPillars) -> Vec<BranchInteraction> {
    detect_branch_interactions_iter(chart).collect()
}

/// Punishments and harms only, lazily.
pub fn detect_punishments_iter(
    chart: &FourPillars,
) -> impl Iterator<Item = BranchInteraction> + '_ {
    detect_branch_interactions_iter(chart).filter(|i| i.kind.is_punishment())
}

pub fn detect_punishments(chart: &FourPillars) -> Vec<BranchInteraction> {
    detect_punishments_iter(chart).collect()
}

// ---------------------------------------------------------------------------
// Three-branch combinations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrioKind {
    /// 三合: birth, peak and grave of an element.
    ThreeHarmony,
    /// 半三合: two of a Three Harmony, always including the peak.
    HalfHarmony,
    /// 三会: the three branches of one season.
    Directional,
}

impl TrioKind {
    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::ThreeHarmony, Language::Chinese) => "三合",
            (Self::HalfHarmony, Language::Chinese) => "半三合",
            (Self::Directional, Language::Chinese) => "三会",
            (Self::ThreeHarmony, Language::English) => "Three Harmony",
            (Self::HalfHarmony, Language::English) => "Half Harmony",
            (Self::Directional, Language::English) => "Directional",
            (Self::ThreeHarmony, Language::Vietnamese) => "Tam Hợp",
            (Self::HalfHarmony, Language::Vietnamese) => "Bán Tam Hợp",
            (Self::Directional, Language::Vietnamese) => "Tam Hội",
        }
    }
}

/// Three Harmonies as (birth, peak, grave).
#[rustfmt::skip]
pub const THREE_HARMONIES: [([EarthlyBranch; 3], Element); 4] = [
    ([Shen, Zi, Chen], Element::Water),
    ([Hai, Mao, Wei],  Element::Wood),
    ([Yin, Wu, Xu],    Element::Fire),
    ([Si, You, Chou],  Element::Metal),
];

#[rustfmt::skip]
pub const DIRECTIONAL_COMBINATIONS: [([EarthlyBranch; 3], Element); 4] = [
    ([Yin, Mao, Chen], Element::Wood),
    ([Si, Wu, Wei],    Element::Fire),
    ([Shen, You, Xu],  Element::Metal),
    ([Hai, Zi, Chou],  Element::Water),
];

/// A detected multi-branch combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrioCombination {
    pub kind: TrioKind,
    pub element: Element,
    /// The branches that form it, in table order.
    pub branches: Vec<EarthlyBranch>,
    /// Every pillar holding one of those branches.
    pub positions: Vec<PillarPosition>,
}

/// Full trios first (Three Harmonies, then Directional), then half
/// harmonies per pillar pair whose trio is not already complete.
pub fn detect_trio_combinations(chart: &FourPillars) -> Vec<TrioCombination> {
    let present = |b: EarthlyBranch| chart.pillars().iter().any(|p| p.branch == b);
    let positions = |set: &[EarthlyBranch]| -> Vec<PillarPosition> {
        chart
            .iter()
            .filter(|(_, p)| set.contains(&p.branch))
            .map(|(pos, _)| pos)
            .collect()
    };

    let mut out = Vec::new();
    for (kind, table) in [
        (TrioKind::ThreeHarmony, &THREE_HARMONIES),
        (TrioKind::Directional, &DIRECTIONAL_COMBINATIONS),
    ] {
        for (trio, element) in table {
            if trio.iter().all(|&b| present(b)) {
                out.push(TrioCombination {
                    kind,
                    element: *element,
                    branches: trio.to_vec(),
                    positions: positions(trio),
                });
            }
        }
    }

    for (a, b) in FourPillars::pairs() {
        let (x, y) = (chart[a].branch, chart[b].branch);
        let Some((trio, element)) = half_harmony(x, y) else {
            continue;
        };
        if trio.iter().all(|&t| present(t)) {
            continue;
        }
        out.push(TrioCombination {
            kind: TrioKind::HalfHarmony,
            element,
            branches: vec![x, y],
            positions: vec![a, b],
        });
    }
    out
}

/// The Three Harmony that `a` and `b` half-form: peak with birth or grave.
fn half_harmony(a: EarthlyBranch, b: EarthlyBranch) -> Option<([EarthlyBranch; 3], Element)> {
    THREE_HARMONIES.into_iter().find(|([birth, peak, grave], _)| {
        (a == *peak && (b == *birth || b == *grave)) || (b == *peak && (a == *birth || a == *grave))
    })
}
