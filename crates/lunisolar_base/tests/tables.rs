//! Cross-table consistency of the stem-branch system.

use lunisolar_base::{
    ALL_BRANCHES, ALL_STEMS, GanZhi, Language, cycle_from, element_relation, longevity_stage,
    na_yin, ten_god,
};

#[test]
fn sixty_distinct_positions() {
    let mut cycles: Vec<u8> = ALL_STEMS
        .iter()
        .flat_map(|s| ALL_BRANCHES.iter().filter_map(move |b| cycle_from(s.index(), b.index())))
        .collect();
    cycles.sort_unstable();
    assert_eq!(cycles, (1..=60).collect::<Vec<u8>>());
}

#[test]
fn ten_god_follows_element_relation() {
    for dm in ALL_STEMS {
        for s in ALL_STEMS {
            assert_eq!(
                ten_god(dm, s).relation(),
                element_relation(dm.element(), s.element())
            );
        }
    }
}

#[test]
fn wood_stems_peak_at_wood_branches() {
    // 甲 peaks at 卯, 乙 at 寅.
    let jia = longevity_stage(ALL_STEMS[0], ALL_BRANCHES[3]);
    let yi = longevity_stage(ALL_STEMS[1], ALL_BRANCHES[2]);
    assert_eq!(jia, yi);
    assert!(jia.is_strong());
}

#[test]
fn na_yin_labels_all_languages() {
    for c in 1..=60u8 {
        let n = na_yin(c).unwrap();
        for lang in [Language::Chinese, Language::English, Language::Vietnamese] {
            assert!(!n.label(lang).is_empty());
        }
        assert_eq!(GanZhi::from_cycle(c).unwrap().na_yin(), n);
    }
}
