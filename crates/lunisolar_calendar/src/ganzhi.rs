//! Sexagenary pillars for year, month, day and hour.

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, GanZhi, HeavenlyStem, Language};
use lunisolar_time::days_from_civil;

/// Day number of the cycle-1 (甲子) reference day, 4-01-31 proleptic Gregorian.
pub const DAY_CYCLE_EPOCH: i64 = days_from_civil(4, 1, 31);

/// Year pillar; year 4 is 甲子.
pub const fn year_pillar(lunar_year: i32) -> GanZhi {
    GanZhi::from_offset(lunar_year as i64 - 4)
}

/// Month pillar from the year pillar and lunar month 1..=12.
///
/// Month 1 is always a 寅 month. Its stem starts at 丙 for 甲/己 years, 戊 for
/// 乙/庚, 庚 for 丙/辛, 壬 for 丁/壬 and 甲 for 戊/癸, then steps once per month.
/// Leap months reuse the pillar of the month they repeat.
pub const fn month_pillar(year: GanZhi, lunar_month: u8) -> GanZhi {
    let m = (lunar_month as i64 - 1).rem_euclid(12);
    let start_stem = (year.stem().index() % 5) as i64;
    GanZhi::from_offset(2 + 12 * start_stem + m)
}

/// Day pillar for a local day number.
pub const fn day_pillar(local_day: i64) -> GanZhi {
    GanZhi::from_offset(local_day - DAY_CYCLE_EPOCH)
}

/// Double-hour branch for a local decimal hour.
///
/// 子 covers [23, 24) and [0, 1); every later branch covers two hours from 1:00.
pub fn hour_branch(decimal_hour: f64) -> EarthlyBranch {
    if !(1.0..23.0).contains(&decimal_hour) {
        return EarthlyBranch::Zi;
    }
    let k = ((decimal_hour - 1.0) / 2.0).floor() as i64 + 1;
    EarthlyBranch::wrapping(k.min(11))
}

/// Hour pillar from the civil day's pillar and the local wall-clock time.
///
/// From 23:00 the next day's stem governs, so the day stem is advanced by one.
pub fn hour_pillar(day: GanZhi, hour: u32, minute: u32) -> GanZhi {
    let decimal = f64::from(hour) + f64::from(minute) / 60.0;
    let branch = hour_branch(decimal);
    let day_stem = if hour >= 23 {
        HeavenlyStem::wrapping(day.stem().index() as i64 + 1)
    } else {
        day.stem()
    };
    // The 子 hour of a 甲/己 day is 甲子; each later stem pair starts 12 positions on.
    GanZhi::from_offset(12 * (day_stem.index() % 5) as i64 + branch.index() as i64)
}

/// The four pillars of one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SexagenaryPillars {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl SexagenaryPillars {
    /// In year, month, day, hour order.
    pub const fn as_array(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Labels joined with spaces, e.g. `乙巳 戊寅 戊戌 戊午`.
    pub fn label(&self, lang: Language) -> String {
        self.as_array()
            .iter()
            .map(|g| g.label(lang))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gz(s: &str) -> GanZhi {
        s.parse().unwrap()
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(4), gz("甲子"));
        assert_eq!(year_pillar(1984), gz("甲子"));
        assert_eq!(year_pillar(2024), gz("甲辰"));
        assert_eq!(year_pillar(2025).cycle(), 42);
        assert_eq!(year_pillar(1999).cycle(), 16);
        assert_eq!(year_pillar(3), gz("癸亥"));
        assert_eq!(year_pillar(-56), gz("甲子"));
    }

    #[test]
    fn month_pillar_five_tigers() {
        let starts = [
            ("甲子", "丙寅"),
            ("乙丑", "戊寅"),
            ("丙寅", "庚寅"),
            ("丁卯", "壬寅"),
            ("戊辰", "甲寅"),
            ("己巳", "丙寅"),
            ("癸酉", "甲寅"),
        ];
        for (year, first) in starts {
            assert_eq!(month_pillar(gz(year), 1), gz(first), "{year}");
        }
    }

    #[test]
    fn month_branches_follow_calendar() {
        let year = gz("乙巳");
        assert_eq!(month_pillar(year, 11), gz("戊子"));
        assert_eq!(month_pillar(year, 12), gz("己丑"));
        assert_eq!(month_pillar(gz("甲辰"), 11), gz("丙子"));
        for m in 1..=12u8 {
            let p = month_pillar(year, m);
            assert_eq!(p.branch().index(), (m + 1) % 12);
        }
    }

    #[test]
    fn day_pillar_epoch() {
        assert_eq!(day_pillar(DAY_CYCLE_EPOCH), gz("甲子"));
        assert_eq!(day_pillar(DAY_CYCLE_EPOCH - 1), gz("癸亥"));
        assert_eq!(day_pillar(days_from_civil(2000, 1, 1)).cycle(), 55);
        assert_eq!(day_pillar(days_from_civil(2025, 1, 29)).cycle(), 35);
        assert_eq!(day_pillar(days_from_civil(2024, 12, 21)), gz("己未"));
    }

    #[test]
    fn hour_branch_brackets() {
        assert_eq!(hour_branch(0.0), EarthlyBranch::Zi);
        assert_eq!(hour_branch(0.99), EarthlyBranch::Zi);
        assert_eq!(hour_branch(1.0), EarthlyBranch::Chou);
        assert_eq!(hour_branch(12.0), EarthlyBranch::Wu);
        assert_eq!(hour_branch(17.33), EarthlyBranch::You);
        assert_eq!(hour_branch(22.99), EarthlyBranch::Hai);
        assert_eq!(hour_branch(23.0), EarthlyBranch::Zi);
    }

    #[test]
    fn hour_pillars() {
        assert_eq!(hour_pillar(gz("戊戌"), 12, 0), gz("戊午"));
        assert_eq!(hour_pillar(gz("己未"), 17, 20), gz("癸酉"));
        assert_eq!(hour_pillar(gz("甲子"), 0, 30), gz("甲子"));
        assert_eq!(hour_pillar(gz("戊戌"), 0, 30), gz("壬子"));
    }

    #[test]
    fn hour_stems_follow_five_rats() {
        for d in 0..10u8 {
            let day = GanZhi::from_offset(i64::from(d));
            for b in 0..12u8 {
                let hour = if b == 0 { 0 } else { 2 * u32::from(b) - 1 };
                let p = hour_pillar(day, hour, 0);
                let stem = (2 * (d % 5) + b) % 10;
                assert_eq!(p.branch().index(), b);
                assert_eq!(
                    lunisolar_base::cycle_from(stem, b),
                    Some(p.cycle()),
                    "day {day} branch {b}"
                );
            }
        }
    }

    #[test]
    fn late_zi_hour_uses_next_day_stem() {
        // 丁酉 day at 23:30 takes 戊's 子 hour.
        assert_eq!(hour_pillar(gz("丁酉"), 23, 30), gz("壬子"));
        assert_eq!(hour_pillar(gz("丁酉"), 0, 30), gz("庚子"));
    }

    #[test]
    fn pillars_label() {
        let p = SexagenaryPillars {
            year: gz("乙巳"),
            month: gz("戊寅"),
            day: gz("戊戌"),
            hour: gz("戊午"),
        };
        assert_eq!(p.label(Language::Chinese), "乙巳 戊寅 戊戌 戊午");
        assert_eq!(p.as_array()[2], gz("戊戌"));
    }
}
