//! Continuous UTC instants and their local wall-clock decomposition.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::civil::{CivilDate, civil_from_days, days_from_civil};
use crate::error::TimeError;

/// Seconds per civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Julian Date of 1970-01-01T00:00:00 UTC.
pub const J1970_JD: f64 = 2_440_587.5;

/// A UTC instant as seconds since 1970-01-01T00:00:00Z.
///
/// Leap seconds are not modelled; every civil day is 86 400 s long.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct UnixTime(f64);

impl UnixTime {
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    pub fn from_millis(millis: f64) -> Self {
        Self(millis / 1000.0)
    }

    pub const fn as_seconds(self) -> f64 {
        self.0
    }

    pub fn as_millis(self) -> f64 {
        self.0 * 1000.0
    }

    /// Julian Date (UTC scale).
    pub fn to_jd(self) -> f64 {
        self.0 / SECONDS_PER_DAY as f64 + J1970_JD
    }

    pub fn from_jd(jd: f64) -> Self {
        Self((jd - J1970_JD) * SECONDS_PER_DAY as f64)
    }

    /// Instant of a UTC civil date and time.
    pub fn from_utc(date: CivilDate, hour: u32, minute: u32, second: f64) -> Self {
        let days = days_from_civil(date.year, date.month, date.day);
        Self(
            (days * SECONDS_PER_DAY) as f64
                + f64::from(hour) * 3600.0
                + f64::from(minute) * 60.0
                + second,
        )
    }

    /// Shift by a number of seconds.
    pub fn add_seconds(self, seconds: f64) -> Self {
        Self(self.0 + seconds)
    }

    /// Split into local wall-clock parts under a fixed UTC offset.
    ///
    /// The instant is floored to whole seconds before the offset is applied,
    /// and day boundaries use floor division, so instants before 1970 (or
    /// negative offsets crossing midnight) land on the correct civil day.
    pub fn decompose(self, offset_seconds: i64) -> LocalDateTime {
        let total = self.0.floor() as i64 + offset_seconds;
        let days = total.div_euclid(SECONDS_PER_DAY);
        let tod = total.rem_euclid(SECONDS_PER_DAY) as u32;
        LocalDateTime {
            date: civil_from_days(days),
            hour: tod / 3600,
            minute: (tod % 3600) / 60,
            second: tod % 60,
        }
    }

    /// Local civil date under the offset.
    pub fn local_date(self, offset_seconds: i64) -> CivilDate {
        self.decompose(offset_seconds).date
    }

    /// Local day number (days since 1970-01-01 on the local calendar).
    pub fn local_day_number(self, offset_seconds: i64) -> i64 {
        (self.0.floor() as i64 + offset_seconds).div_euclid(SECONDS_PER_DAY)
    }

    /// Gregorian year of the instant in UTC.
    pub fn utc_year(self) -> i32 {
        self.local_date(0).year
    }
}

impl Display for UnixTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = self.decompose(0);
        write!(f, "{parts}Z")
    }
}

/// Local wall-clock date and time, whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LocalDateTime {
    pub date: CivilDate,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LocalDateTime {
    /// Validated constructor.
    pub fn new(date: CivilDate, hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(TimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            date,
            hour,
            minute,
            second,
        })
    }

    /// Hour plus minutes as a fraction; seconds are ignored.
    pub fn decimal_hour(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// The UTC instant of this wall-clock time under `offset_seconds`.
    pub fn to_unix_time(&self, offset_seconds: i64) -> UnixTime {
        let days = self.date.day_number();
        let local = days * SECONDS_PER_DAY
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        UnixTime::from_seconds((local - offset_seconds) as f64)
    }
}

impl Display for LocalDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date, self.hour, self.minute, self.second
        )
    }
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm`, `YYYY-MM-DDThh:mm:ss`, with a
/// space allowed in place of `T` and an optional trailing `Z`.
impl FromStr for LocalDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date_part, time_part) = match s.find(['T', ' ']) {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };

        let (negative, date_body) = match date_part.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date_part),
        };
        let fields: Vec<&str> = date_body.split('-').collect();
        if fields.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{date_part}'")));
        }
        let year: i32 = parse_field(fields[0], "year")?;
        let year = if negative { -year } else { year };
        let month: u32 = parse_field(fields[1], "month")?;
        let day: u32 = parse_field(fields[2], "day")?;
        let date = CivilDate::new(year, month, day)?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0),
            Some(t) => {
                let parts: Vec<&str> = t.split(':').collect();
                match parts.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0),
                    [h, m, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => {
                        return Err(TimeError::Parse(format!(
                            "expected hh:mm[:ss], got '{t}'"
                        )));
                    }
                }
            }
        };
        Self::new(date, hour, minute, second)
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TimeError> {
    s.parse()
        .map_err(|_| TimeError::Parse(format!("invalid {what} '{s}'")))
}

/// Largest accepted UTC offset magnitude, 14 hours (UTC+14:00 / UTC-14:00).
pub const MAX_UTC_OFFSET_SECONDS: i64 = 14 * 3600;

/// Parse a UTC offset: `+08:00`, `-0530`, `+7`, or plain seconds (`28800`).
///
/// Every form is limited to ±14:00.
pub fn parse_utc_offset(s: &str) -> Result<i64, TimeError> {
    let s = s.trim();
    let signed = s.starts_with(['+', '-']);
    let seconds = if !signed || (!s.contains(':') && s.len() > 5) {
        s.parse()
            .map_err(|_| TimeError::Parse(format!("invalid UTC offset '{s}'")))?
    } else {
        let sign = if s.starts_with('-') { -1 } else { 1 };
        let body = &s[1..];
        let (h, m) = match body.split_once(':') {
            Some((h, m)) => (h, m),
            None if body.len() == 4 => body.split_at(2),
            None => (body, "0"),
        };
        let hours: i64 = parse_field(h, "offset hours")?;
        let minutes: i64 = parse_field(m, "offset minutes")?;
        if minutes > 59 {
            return Err(TimeError::Parse(format!("UTC offset out of range '{s}'")));
        }
        sign * (hours * 3600 + minutes * 60)
    };
    if seconds.abs() > MAX_UTC_OFFSET_SECONDS {
        return Err(TimeError::Parse(format!("UTC offset out of range '{s}'")));
    }
    Ok(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate { year: y, month: m, day: d }
    }

    #[test]
    fn decompose_utc() {
        let t = UnixTime::from_utc(date(2024, 2, 10), 14, 35, 7.9);
        let p = t.decompose(0);
        assert_eq!(p.date, date(2024, 2, 10));
        assert_eq!((p.hour, p.minute, p.second), (14, 35, 7));
    }

    #[test]
    fn positive_offset_crosses_midnight() {
        let t = UnixTime::from_utc(date(2024, 12, 31), 17, 0, 0.0);
        let p = t.decompose(8 * 3600);
        assert_eq!(p.date, date(2025, 1, 1));
        assert_eq!(p.hour, 1);
    }

    #[test]
    fn negative_offset_crosses_midnight() {
        let t = UnixTime::from_utc(date(2025, 1, 1), 3, 0, 0.0);
        let p = t.decompose(-5 * 3600);
        assert_eq!(p.date, date(2024, 12, 31));
        assert_eq!(p.hour, 22);
    }

    #[test]
    fn pre_epoch_floors_not_truncates() {
        // One and a half seconds before the epoch is 23:59:58 on 1969-12-31.
        let p = UnixTime::from_seconds(-1.5).decompose(0);
        assert_eq!(p.date, date(1969, 12, 31));
        assert_eq!((p.hour, p.minute, p.second), (23, 59, 58));
        assert_eq!(UnixTime::from_seconds(-1.5).local_day_number(0), -1);
    }

    #[test]
    fn millis_roundtrip() {
        let t = UnixTime::from_millis(1_706_745_600_000.0);
        assert_eq!(t.as_seconds(), 1_706_745_600.0);
        assert_eq!(t.local_date(0), date(2024, 2, 1));
    }

    #[test]
    fn julian_date_conversion() {
        let t = UnixTime::from_utc(date(2000, 1, 1), 12, 0, 0.0);
        assert!((t.to_jd() - 2_451_545.0).abs() < 1e-9);
        assert!((UnixTime::from_jd(2_451_545.0).as_seconds() - t.as_seconds()).abs() < 1e-3);
    }

    #[test]
    fn decimal_hour_ignores_seconds() {
        let l = LocalDateTime::new(date(2024, 1, 1), 23, 30, 59).unwrap();
        assert!((l.decimal_hour() - 23.5).abs() < 1e-12);
    }

    #[test]
    fn local_to_unix_inverse_of_decompose() {
        let l: LocalDateTime = "2025-01-29T00:30:00".parse().unwrap();
        let t = l.to_unix_time(28_800);
        assert_eq!(t.decompose(28_800), l);
        assert_eq!(t.decompose(0).date, date(2025, 1, 28));
    }

    #[test]
    fn parse_variants() {
        let a: LocalDateTime = "2024-03-20".parse().unwrap();
        assert_eq!((a.hour, a.minute), (0, 0));
        let b: LocalDateTime = "2024-03-20 08:15".parse().unwrap();
        assert_eq!((b.hour, b.minute, b.second), (8, 15, 0));
        let c: LocalDateTime = "2024-03-20T08:15:42Z".parse().unwrap();
        assert_eq!(c.second, 42);
        let d: LocalDateTime = "-0100-06-01".parse().unwrap();
        assert_eq!(d.date.year, -100);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("2024-13-01".parse::<LocalDateTime>().is_err());
        assert!("2024/01/01".parse::<LocalDateTime>().is_err());
        assert!("2024-01-01T25:00".parse::<LocalDateTime>().is_err());
        assert!("2024-01-01T10".parse::<LocalDateTime>().is_err());
    }

    #[test]
    fn utc_offsets() {
        assert_eq!(parse_utc_offset("+08:00").unwrap(), 28_800);
        assert_eq!(parse_utc_offset("-0530").unwrap(), -19_800);
        assert_eq!(parse_utc_offset("+7").unwrap(), 25_200);
        assert_eq!(parse_utc_offset("28800").unwrap(), 28_800);
        assert_eq!(parse_utc_offset("-18000").unwrap(), -18_000);
        assert!(parse_utc_offset("+25:00").is_err());
        assert!(parse_utc_offset("abc").is_err());
    }

    #[test]
    fn utc_offsets_limited_to_fourteen_hours() {
        assert_eq!(parse_utc_offset("50400").unwrap(), MAX_UTC_OFFSET_SECONDS);
        assert_eq!(parse_utc_offset("-50400").unwrap(), -MAX_UTC_OFFSET_SECONDS);
        assert_eq!(parse_utc_offset("+14:00").unwrap(), 50_400);
        assert!(parse_utc_offset("999999").is_err());
        assert!(parse_utc_offset("-50401").is_err());
        assert!(parse_utc_offset("+14:30").is_err());
        assert!(parse_utc_offset("-1500").is_err());
    }

    #[test]
    fn display_iso() {
        let t = UnixTime::from_utc(date(2024, 12, 21), 9, 20, 0.0);
        assert_eq!(t.to_string(), "2024-12-21T09:20:00Z");
    }
}
