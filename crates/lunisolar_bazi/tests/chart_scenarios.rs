//! Whole-chart scenarios.

use lunisolar_base::{EarthlyBranch, Element, Language, LongevityStage, TenGod};
use lunisolar_bazi::{
    DayMasterStrength, FourPillars, Gender, InteractionKind, LuckAge, LuckStart,
    PillarPosition, RecurrenceMatch, RootClass, Star, TransformationStatus, TrioKind,
    analyze_chart, detect_branch_interactions_iter, detect_transformations,
    detect_transformations_iter, generate_luck_pillars, luck_start_from_terms,
    score_day_master,
};
use lunisolar_search::{AnalyticOracle, SearchConfig, compute_window};
use lunisolar_time::{CivilDate, UnixTime};

use PillarPosition::{Day, Hour, Month, Year};

fn chart(s: &str) -> FourPillars {
    s.parse().unwrap()
}

/// Lunar New Year 2025 at noon (UTC+8).
fn new_year_2025() -> FourPillars {
    chart("乙巳,戊寅,戊戌,戊午")
}

#[test]
fn new_year_2025_profile() {
    let a = analyze_chart(&new_year_2025(), None);

    assert_eq!(a.day_master_element, Element::Earth);
    let gods: Vec<_> = a.pillars.iter().map(|p| p.ten_god).collect();
    assert_eq!(
        gods,
        vec![
            Some(TenGod::DirectOfficer),
            Some(TenGod::Companion),
            None,
            Some(TenGod::Companion)
        ]
    );
    let stages: Vec<_> = a.pillars.iter().map(|p| p.longevity).collect();
    assert_eq!(
        stages,
        vec![
            LongevityStage::ComingOfAge,
            LongevityStage::Growth,
            LongevityStage::Grave,
            LongevityStage::ProsperityPeak
        ]
    );
    assert_eq!(a.pillars[0].na_yin.map(|n| n.chinese), Some("覆灯火"));
    assert_eq!(a.pillars[2].na_yin.map(|n| n.chinese), Some("平地木"));

    assert_eq!(a.element_tally.counts, [2, 2, 4, 0, 0]);
    assert_eq!(a.element_tally.dominant(), Element::Earth);
    assert_eq!(
        a.element_tally.missing().collect::<Vec<_>>(),
        vec![Element::Metal, Element::Water]
    );

    let void = a.void_branches.unwrap();
    assert_eq!(void.branches, [EarthlyBranch::Chen, EarthlyBranch::Si]);
    assert_eq!(void.hits, vec![Year]);
}

#[test]
fn new_year_2025_interactions() {
    let a = analyze_chart(&new_year_2025(), None);
    assert!(a.stem_combinations.is_empty());
    assert!(a.transformations.is_empty());

    let found: Vec<_> = a
        .branch_interactions
        .iter()
        .map(|i| (i.pair, i.kind, i.severity))
        .collect();
    assert_eq!(
        found,
        vec![
            ((Year, Month), InteractionKind::BullyPunishment, 70),
            ((Year, Month), InteractionKind::Harm, 70),
        ]
    );

    assert_eq!(a.trio_combinations.len(), 1);
    let trio = &a.trio_combinations[0];
    assert_eq!(trio.kind, TrioKind::ThreeHarmony);
    assert_eq!(trio.element, Element::Fire);
    assert_eq!(trio.positions, vec![Month, Day, Hour]);
}

#[test]
fn year_pillar_recurs() {
    let a = analyze_chart(&new_year_2025(), Some("乙巳".parse().unwrap()));
    assert_eq!(a.recurrence.len(), 1);
    assert_eq!(a.recurrence[0].natal, Year);
    assert_eq!(a.recurrence[0].match_type, RecurrenceMatch::Exact);
    assert_eq!(a.recurrence[0].confidence, 90);
}

#[test]
fn adjacent_supported_transformation() {
    // 丁 + 壬 -> Wood in month and day, 寅 month, 甲 hour leads.
    let c = chart("丙午,丁寅,壬子,甲子");
    let t = detect_transformations(&c);
    assert_eq!(t.len(), 1);
    assert_eq!(t[0].status, TransformationStatus::Successful);
    assert_eq!(t[0].confidence, 95);
    assert_eq!(t[0].status.label(Language::Vietnamese), "Hóa (successful)");
}

#[test]
fn capacity_keeps_pair_order() {
    // 甲 and 己 alternate: four combinations.
    let c = FourPillars::from_indices([(0, 0), (5, 1), (0, 2), (5, 3)]).unwrap();
    let all = detect_transformations(&c);
    assert_eq!(all.len(), 4);
    let first_two: Vec<_> = detect_transformations_iter(&c).take(2).collect();
    assert_eq!(first_two, all[..2]);

    let none: Vec<_> = detect_branch_interactions_iter(&c).take(0).collect();
    assert!(none.is_empty());
}

#[test]
fn analysis_serializes() {
    let a = analyze_chart(&new_year_2025(), Some("乙巳".parse().unwrap()));
    let json = serde_json::to_value(&a).unwrap();
    assert_eq!(json["day_master"], "Wu");
    assert_eq!(json["pillars"][2]["ten_god"], serde_json::Value::Null);
    assert_eq!(json["branch_interactions"][0]["life_areas"][0], "career");
}

#[test]
fn new_year_2025_strength() {
    let c = new_year_2025();
    // Natal: -6 season, +6.5 Earth hidden, +4.65 Fire hidden, +5.5 visible.
    let natal = score_day_master(&c);
    assert!((natal.score - 10.65).abs() < 1e-9, "{}", natal.score);
    assert_eq!(natal.strength, DayMasterStrength::ExtremeStrong);

    // Rooting replaces the hidden Earth term; the 寅午戌 Fire frame adds 1.5.
    let a = analyze_chart(&c, None);
    assert!((a.rooting.total - 3.6).abs() < 1e-9, "{}", a.rooting.total);
    assert_eq!(a.rooting.class, RootClass::Moderate);
    assert!((a.strength.score - 9.25).abs() < 1e-9, "{}", a.strength.score);
    assert_eq!(a.strength.strength, DayMasterStrength::Strong);
    assert!(!a.strength.jian_lu);
    assert!(a.symbolic_stars.iter().any(|s| s.star == Star::Prosperity && s.position == Year));
}

#[test]
fn new_year_2025_luck_pillars() {
    let c = new_year_2025();
    let window = compute_window(&AnalyticOracle, 2024, 2025, &SearchConfig::default()).unwrap();
    let date = CivilDate::new(2025, 1, 29).unwrap();
    let birth = UnixTime::from_utc(date, 4, 0, 0.0);

    // 乙 is Yin: a male chart runs backward to 小寒 on 2025-01-05, 24 days.
    let start = luck_start_from_terms(&c, Gender::Male, &window.solar_terms, birth, 28_800);
    assert_eq!(
        start,
        LuckStart::Age {
            birth_year: 2025,
            age: LuckAge::new(8, 0)
        }
    );
    let lp = generate_luck_pillars(&c, Gender::Male, 3, start);
    let labels: Vec<String> = lp.iter().map(|p| p.pillar.to_string()).collect();
    assert_eq!(labels, ["丁丑", "丙子", "乙亥"]);
    assert_eq!(lp[1].start_year, Some(2043));

    // A female chart runs forward to 立春 on 2025-02-03, 5 days.
    let start = luck_start_from_terms(&c, Gender::Female, &window.solar_terms, birth, 28_800);
    let lp = generate_luck_pillars(&c, Gender::Female, 1, start);
    assert_eq!(lp[0].pillar.to_string(), "己卯");
    assert_eq!(lp[0].start_age, Some(LuckAge::new(1, 8)));
    assert_eq!(lp[0].start_year, Some(2026));
}
