//! Per-pillar profile and whole-chart analysis.

use serde::Serialize;

use lunisolar_base::{
    ALL_ELEMENTS, EarthlyBranch, Element, HeavenlyStem, Language, LongevityStage, NaYin,
    Polarity, TenGod, longevity_stage, ten_god,
};

use crate::chart::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition};
use crate::interactions::{
    BranchInteraction, TrioCombination, detect_branch_interactions, detect_trio_combinations,
};
use crate::recurrence::{RecurrenceEvent, detect_recurrence};
use crate::strength::{DayMasterRooting, DayMasterScore, analyze_rooting, score_day_master_with};
use crate::symbolic_stars::{SymbolicStar, detect_symbolic_stars};
use crate::transformations::{
    StemCombination, Transformation, detect_stem_combinations, detect_transformations,
};

/// Ten God of each pillar's stem against the Day Master.
///
/// The Day pillar compares with itself and is always [`TenGod::Companion`].
pub fn ten_gods(chart: &FourPillars) -> [TenGod; 4] {
    let dm = chart.day_master();
    chart.pillars().map(|p| ten_god(dm, p.stem))
}

/// Longevity stage of the Day Master in each pillar's branch.
pub fn longevity_stages(chart: &FourPillars) -> [LongevityStage; 4] {
    let dm = chart.day_master();
    chart.pillars().map(|p| longevity_stage(dm, p.branch))
}

/// Na Yin of each pillar; `None` for a pillar outside the 60-cycle.
pub fn na_yin_per_pillar(chart: &FourPillars) -> [Option<&'static NaYin>; 4] {
    chart.pillars().map(|p| p.ganzhi().map(|g| g.na_yin()))
}

/// The Day pillar's void (空亡) pair and the pillars whose branch falls in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoidBranches {
    pub branches: [EarthlyBranch; 2],
    pub hits: Vec<PillarPosition>,
}

/// `None` when the Day pillar is not a cycle position.
pub fn void_branches(chart: &FourPillars) -> Option<VoidBranches> {
    let branches = chart.day().ganzhi()?.void_branches();
    let hits = chart
        .iter()
        .filter(|(pos, p)| *pos != PillarPosition::Day && branches.contains(&p.branch))
        .map(|(pos, _)| pos)
        .collect();
    Some(VoidBranches { branches, hits })
}

/// Count of each element among the four stems and the four branches' main
/// hidden stems, indexed by [`Element::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementTally {
    pub counts: [u8; 5],
}

impl ElementTally {
    pub fn of(chart: &FourPillars) -> Self {
        let mut counts = [0u8; 5];
        for p in chart.pillars() {
            counts[p.stem.element().index() as usize] += 1;
            counts[p.branch.main_stem().element().index() as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Elements absent from the chart.
    pub fn missing(&self) -> impl Iterator<Item = Element> + '_ {
        ALL_ELEMENTS.into_iter().filter(|&e| self.count(e) == 0)
    }

    /// Most frequent element; the earliest in production order on ties.
    pub fn dominant(&self) -> Element {
        ALL_ELEMENTS
            .into_iter()
            .rev()
            .max_by_key(|&e| self.count(e))
            .unwrap_or(Element::Wood)
    }
}

/// One pillar's place relative to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarProfile {
    pub position: PillarPosition,
    pub pillar: Pillar,
    /// `None` for the Day pillar, which is the Day Master itself.
    pub ten_god: Option<TenGod>,
    pub longevity: LongevityStage,
    pub na_yin: Option<&'static NaYin>,
}

impl PillarProfile {
    pub fn ten_god_label(&self, lang: Language) -> &'static str {
        match (self.ten_god, lang) {
            (Some(t), _) => t.label(lang),
            (None, Language::Chinese) => "日主",
            (None, Language::English) => "Day Master",
            (None, Language::Vietnamese) => "Nhật Chủ",
        }
    }
}

/// Everything derived from one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartAnalysis {
    pub chart: FourPillars,
    pub day_master: HeavenlyStem,
    pub day_master_element: Element,
    pub day_master_polarity: Polarity,
    pub pillars: [PillarProfile; 4],
    pub stem_combinations: Vec<StemCombination>,
    pub transformations: Vec<Transformation>,
    pub branch_interactions: Vec<BranchInteraction>,
    pub trio_combinations: Vec<TrioCombination>,
    pub void_branches: Option<VoidBranches>,
    pub element_tally: ElementTally,
    pub rooting: DayMasterRooting,
    pub strength: DayMasterScore,
    pub symbolic_stars: Vec<SymbolicStar>,
    /// Empty unless a dynamic pillar was given.
    pub recurrence: Vec<RecurrenceEvent>,
}

/// Run every detector over `chart`, plus recurrence when `dynamic` is given.
pub fn analyze_chart(chart: &FourPillars, dynamic: Option<Pillar>) -> ChartAnalysis {
    let dm = chart.day_master();
    let gods = ten_gods(chart);
    let stages = longevity_stages(chart);
    let na_yin = na_yin_per_pillar(chart);

    let pillars = ALL_POSITIONS.map(|position| {
        let i = position.index();
        PillarProfile {
            position,
            pillar: chart[position],
            ten_god: (position != PillarPosition::Day).then_some(gods[i]),
            longevity: stages[i],
            na_yin: na_yin[i],
        }
    });

    let branch_interactions = detect_branch_interactions(chart);
    let trio_combinations = detect_trio_combinations(chart);
    let rooting = analyze_rooting(chart);
    let strength = score_day_master_with(chart, &rooting, &trio_combinations, &branch_interactions);

    ChartAnalysis {
        chart: *chart,
        day_master: dm,
        day_master_element: dm.element(),
        day_master_polarity: dm.polarity(),
        pillars,
        stem_combinations: detect_stem_combinations(chart),
        transformations: detect_transformations(chart),
        branch_interactions,
        trio_combinations,
        void_branches: void_branches(chart),
        element_tally: ElementTally::of(chart),
        rooting,
        strength,
        symbolic_stars: detect_symbolic_stars(chart),
        recurrence: dynamic
            .map(|d| detect_recurrence(chart, d))
            .unwrap_or_default(),
    }
}
