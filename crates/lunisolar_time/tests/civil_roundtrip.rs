//! Exhaustive day-number round trips across a wide proleptic span.

use lunisolar_time::{CivilDate, UnixTime, civil_from_days, days_from_civil, days_in_month};

#[test]
fn every_day_roundtrips_from_minus_1000_to_3000() {
    let mut expected = days_from_civil(-1000, 1, 1);
    for year in -1000..=3000 {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                let n = days_from_civil(year, month, day);
                assert_eq!(n, expected, "{year}-{month}-{day} not contiguous");
                assert_eq!(civil_from_days(n), CivilDate { year, month, day });
                expected += 1;
            }
        }
    }
}

#[test]
fn day_numbers_invert_over_large_span() {
    for n in (-2_000_000..2_000_000).step_by(997) {
        let d = civil_from_days(n);
        assert_eq!(days_from_civil(d.year, d.month, d.day), n);
    }
}

#[test]
fn local_day_number_matches_decomposed_date() {
    let offsets = [-43_200, -18_000, 0, 19_800, 28_800, 50_400];
    for k in 0..2000 {
        let t = UnixTime::from_seconds(-3.0e9 + f64::from(k) * 3_333_333.7);
        for off in offsets {
            let d = t.local_date(off);
            assert_eq!(d.day_number(), t.local_day_number(off));
        }
    }
}
