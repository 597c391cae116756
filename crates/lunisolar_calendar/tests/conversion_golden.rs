//! End-to-end conversions through the analytic oracle, checked against
//! published Chinese calendar dates (UTC+8).

use lunisolar_base::{GanZhi, Language};
use lunisolar_calendar::{
    CalendarConfig, CalendarError, LunisolarDate, MonthTable, convert, convert_in_window,
    convert_range, convert_with_oracle,
};
use lunisolar_search::{AnalyticOracle, SearchConfig, SolarTerm, compute_window};
use lunisolar_time::{CivilDate, LocalDateTime, UnixTime};

const CST: i64 = 8 * 3600;

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> UnixTime {
    LocalDateTime::new(CivilDate::new(y, m, d).unwrap(), h, min, 0)
        .unwrap()
        .to_unix_time(CST)
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> LunisolarDate {
    convert_with_oracle(local(y, m, d, h, min), CST, &AnalyticOracle, &CalendarConfig::default())
        .unwrap()
}

fn at_offset(y: i32, m: u32, d: u32, h: u32, min: u32, offset: i64) -> LunisolarDate {
    let t = LocalDateTime::new(CivilDate::new(y, m, d).unwrap(), h, min, 0)
        .unwrap()
        .to_unix_time(offset);
    convert_with_oracle(t, offset, &AnalyticOracle, &CalendarConfig::default()).unwrap()
}

fn gz(s: &str) -> GanZhi {
    s.parse().unwrap()
}

fn assert_lunar(r: &LunisolarDate, year: i32, month: u8, day: u8, leap: bool) {
    assert_eq!(
        (r.lunar_year, r.lunar_month, r.lunar_day, r.is_leap_month),
        (year, month, day, leap),
        "solar {}",
        r.solar
    );
}

#[test]
fn lunar_new_year_2025() {
    let r = at(2025, 1, 29, 12, 0);
    assert_lunar(&r, 2025, 1, 1, false);
    assert_eq!(r.pillars.year, gz("乙巳"));
    assert_eq!(r.pillars.year.cycle(), 42);
    assert_eq!(r.pillars.month, gz("戊寅"));
    assert_eq!(r.pillars.day, gz("戊戌"));
    assert_eq!(r.pillars.day.cycle(), 35);
    assert_eq!(r.pillars.hour, gz("戊午"));
}

#[test]
fn lunar_new_year_2024() {
    let r = at(2024, 2, 10, 12, 0);
    assert_lunar(&r, 2024, 1, 1, false);
    assert_eq!(r.pillars.year, gz("甲辰"));
    assert_eq!(r.pillars.month, gz("丙寅"));
    assert_eq!(r.pillars.day, gz("甲辰"));
    assert_eq!(r.pillars.hour, gz("庚午"));
}

#[test]
fn lunar_new_year_2026() {
    let eve = at(2026, 2, 16, 12, 0);
    assert_lunar(&eve, 2025, 12, 29, false);
    assert_eq!(eve.pillars.year, gz("乙巳"));
    assert_eq!(eve.pillars.month, gz("己丑"));
    assert_eq!(eve.pillars.day, gz("辛酉"));

    let r = at(2026, 2, 17, 12, 0);
    assert_lunar(&r, 2026, 1, 1, false);
    assert_eq!(r.pillars.year, gz("丙午"));
    assert_eq!(r.pillars.month, gz("庚寅"));
    assert_eq!(r.pillars.day, gz("壬戌"));
}

#[test]
fn leap_second_month_2023() {
    let r = at(2023, 4, 1, 12, 0);
    assert_lunar(&r, 2023, 2, 11, true);
    assert_eq!(r.pillars.year, gz("癸卯"));
    assert_eq!(r.pillars.month, gz("乙卯"));
    assert_eq!(r.pillars.day, gz("己丑"));
}

#[test]
fn leap_sixth_month_2025() {
    let r = at(2025, 8, 1, 12, 0);
    assert_lunar(&r, 2025, 6, 8, true);
    assert_eq!(r.pillars.month, gz("癸未"));
    assert_eq!(r.pillars.day, gz("壬寅"));
    assert_eq!(r.date_label(Language::Chinese), "闰六月初八");
    assert_eq!(r.date_label(Language::English), "Leap Month 6, Day 8");
}

#[test]
fn summer_solstice_2025() {
    let r = at(2025, 6, 21, 12, 0);
    assert_lunar(&r, 2025, 5, 26, false);
    assert_eq!(r.pillars.month, gz("壬午"));
    assert_eq!(r.pillars.day, gz("辛酉"));
}

#[test]
fn millennium() {
    let r = at(2000, 1, 1, 12, 0);
    assert_lunar(&r, 1999, 11, 25, false);
    assert_eq!(r.pillars.year, gz("己卯"));
    assert_eq!(r.pillars.month, gz("丙子"));
    assert_eq!(r.pillars.day, gz("戊午"));
    assert_eq!(r.pillars.day.cycle(), 55);
    assert_eq!(r.pillars.hour, gz("戊午"));
}

#[test]
fn twelfth_month_before_new_year() {
    let r = at(2024, 12, 31, 12, 0);
    assert_lunar(&r, 2024, 12, 1, false);
    assert_eq!(r.pillars.year, gz("甲辰"));
    assert_eq!(r.pillars.month, gz("丁丑"));
    assert_eq!(r.pillars.day, gz("己巳"));
}

#[test]
fn late_zi_hour_takes_next_day_stem() {
    let r = at(2025, 1, 28, 23, 30);
    assert_lunar(&r, 2024, 12, 29, false);
    assert_eq!(r.pillars.year, gz("甲辰"));
    assert_eq!(r.pillars.month, gz("丁丑"));
    assert_eq!(r.pillars.day, gz("丁酉"));
    assert_eq!(r.pillars.hour, gz("壬子"));

    let after_midnight = at(2025, 1, 29, 0, 30);
    assert_lunar(&after_midnight, 2025, 1, 1, false);
    assert_eq!(after_midnight.pillars.day, gz("戊戌"));
    assert_eq!(after_midnight.pillars.hour, gz("壬子"));
}

fn window_2023_2025() -> lunisolar_search::EventWindow {
    compute_window(&AnalyticOracle, 2023, 2025, &SearchConfig::default()).unwrap()
}

fn winter_solstice_2024(window: &lunisolar_search::EventWindow) -> UnixTime {
    window
        .solar_terms
        .iter()
        .find(|e| e.term == SolarTerm::WinterSolstice && e.time.utc_year() == 2024)
        .map(|e| e.time)
        .unwrap()
}

#[test]
fn winter_solstice_day_is_month_eleven() {
    let window = window_2023_2025();
    let ws = winter_solstice_2024(&window);

    let r = convert_in_window(ws, CST, &window).unwrap();
    assert_lunar(&r, 2024, 11, 21, false);
    assert_eq!(r.pillars.month, gz("丙子"));
    assert_eq!(r.pillars.day, gz("己未"));
    assert_eq!(r.pillars.hour, gz("癸酉"));

    let utc = convert_in_window(ws, 0, &window).unwrap();
    assert_eq!(utc.lunar_month, 11);
    assert!(!utc.is_leap_month);
    assert!((1..=30).contains(&utc.lunar_day));
    assert_eq!(utc.pillars.hour, gz("己巳"));
}

#[test]
fn conversion_is_deterministic() {
    let window = window_2023_2025();
    let t = local(2024, 6, 1, 8, 15);
    let a = convert(t, CST, &window.new_moons, &window.solar_terms).unwrap();
    let b = convert(t, CST, &window.new_moons, &window.solar_terms).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn month_table_invariants_over_real_data() {
    let window = window_2023_2025();
    let table = MonthTable::assemble(
        &window.new_moons,
        &window.solar_terms,
        local(2024, 6, 1, 12, 0),
        CST,
    )
    .unwrap();
    let periods = table.periods();
    assert_eq!(periods.len(), window.new_moons.len() - 1);
    assert_eq!(table.anchor_period().month, 11);
    assert!(!table.anchor_period().leap);
    for p in periods {
        assert!((1..=12).contains(&p.month));
        assert_eq!(p.leap, !p.has_principal);
        assert!((29..=30).contains(&p.length_days()));
    }
    // No two adjacent leap months, and a leap month repeats its predecessor.
    for w in periods.windows(2) {
        assert!(!(w[0].leap && w[1].leap));
        if w[1].leap && w[1].assigned_by == lunisolar_calendar::Assignment::Forward {
            assert_eq!(w[1].month, w[0].month);
        }
    }
}

#[test]
fn too_narrow_window_is_reported() {
    let window = window_2023_2025();
    // The first new moon of the window is 2023-01-22 (local), so early January is uncovered.
    let early = local(2023, 1, 5, 12, 0);
    assert_eq!(
        convert_in_window(early, CST, &window),
        Err(CalendarError::DateOutOfPeriodRange)
    );
    assert_eq!(
        convert(early, CST, &window.new_moons[..1], &window.solar_terms),
        Err(CalendarError::InsufficientAstronomicalData)
    );
}

#[test]
fn range_walks_day_by_day() {
    let start = CivilDate::new(2025, 1, 27).unwrap();
    let end = CivilDate::new(2025, 2, 2).unwrap();
    let days = convert_range(start, end, CST, &AnalyticOracle, &CalendarConfig::default()).unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0].solar.date, start);
    assert_eq!(days[2].lunar_month, 1);
    assert_eq!(days[2].lunar_day, 1);
    assert_eq!(days[1].lunar_month, 12);
    for w in days.windows(2) {
        assert_eq!(w[1].pillars.day, w[0].pillars.day.offset(1));
    }
}

#[test]
fn range_uses_local_noon_at_extreme_offsets() {
    let start = CivilDate::new(2025, 1, 27).unwrap();
    let end = CivilDate::new(2025, 1, 30).unwrap();
    let pillars = ["丙申", "丁酉", "戊戌", "己亥"];
    // New moon 2025-01-29 12:36 UTC: Jan 30 local east of +11:24, Jan 29 west of it.
    let east = [(12, 28), (12, 29), (12, 30), (1, 1)];
    let west = [(12, 29), (12, 30), (1, 1), (1, 2)];
    for (offset, lunar) in [
        (12 * 3600, east),
        (13 * 3600, east),
        (14 * 3600, east),
        (-12 * 3600, west),
    ] {
        let days =
            convert_range(start, end, offset, &AnalyticOracle, &CalendarConfig::default()).unwrap();
        assert_eq!(days.len(), 4, "offset {offset}");
        assert_eq!(days[0].solar.date, start, "offset {offset}");
        assert_eq!(days[3].solar.date, end, "offset {offset}");
        for (k, day) in days.iter().enumerate() {
            assert_eq!((day.solar.hour, day.solar.minute), (12, 0), "offset {offset}");
            assert_eq!(day.pillars.day, gz(pillars[k]), "offset {offset} day {k}");
            assert_eq!(
                (day.lunar_month, day.lunar_day),
                lunar[k],
                "offset {offset} day {k}"
            );
            assert!(!day.is_leap_month);
        }
    }
}

#[test]
fn single_conversion_at_extreme_offsets() {
    for offset in [13 * 3600, 14 * 3600] {
        let r = at_offset(2025, 1, 29, 12, 0, offset);
        assert_eq!(r.solar.date, CivilDate::new(2025, 1, 29).unwrap());
        assert_lunar(&r, 2024, 12, 30, false);
        assert_eq!(r.pillars.day, gz("戊戌"));
        assert_eq!(r.pillars.year, gz("甲辰"));
    }

    let r = at_offset(2025, 1, 29, 12, 0, -12 * 3600);
    assert_lunar(&r, 2025, 1, 1, false);
    assert_eq!(r.pillars.day, gz("戊戌"));
    assert_eq!(r.pillars.month, gz("戊寅"));
}

#[test]
fn negative_offset_evening_keeps_local_day() {
    // 21:00 at UTC-5 is already 02:00 on Jan 29 in UTC, which is lunar new year there.
    let r = at_offset(2025, 1, 28, 21, 0, -5 * 3600);
    assert_eq!(r.solar.date, CivilDate::new(2025, 1, 28).unwrap());
    assert_eq!(r.utc_offset_seconds, -18_000);
    assert_lunar(&r, 2024, 12, 30, false);
    assert_eq!(r.pillars.day, gz("丁酉"));
    assert_eq!(r.pillars.hour, gz("辛亥"));

    let utc = at_offset(2025, 1, 29, 2, 0, 0);
    assert_lunar(&utc, 2025, 1, 1, false);
    assert_eq!(utc.pillars.day, gz("戊戌"));
}

#[test]
fn range_edge_cases() {
    let a = CivilDate::new(2025, 3, 1).unwrap();
    let b = CivilDate::new(2025, 2, 1).unwrap();
    let config = CalendarConfig {
        max_range_days: 10,
        ..CalendarConfig::default()
    };
    assert!(convert_range(a, b, CST, &AnalyticOracle, &config).unwrap().is_empty());
    assert_eq!(
        convert_range(b, a, CST, &AnalyticOracle, &config),
        Err(CalendarError::ResultBufferTooSmall {
            needed: 29,
            capacity: 10
        })
    );
}

#[test]
fn rendered_view_serializes() {
    let r = at(2025, 1, 29, 12, 0);
    let view = r.render(Language::English);
    assert_eq!(view.year.label, "Yi Si");
    assert_eq!(view.year.cycle, 42);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["lunar_month"], 1);
    assert_eq!(json["day"]["stem"], "Wu");
    assert_eq!(r.render(Language::Vietnamese).year.label, "Ất Tỵ");
}
