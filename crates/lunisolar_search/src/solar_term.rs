//! The 24 solar terms (二十四节气).
//!
//! Index `i` is the instant the Sun's apparent longitude reaches `15·i`
//! degrees, so index 0 is the Spring Equinox. Even indices are the twelve
//! principal terms (中气) that decide leap months.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use lunisolar_base::{Language, LookupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum SolarTerm {
    SpringEquinox,
    ClearAndBright,
    GrainRain,
    StartOfSummer,
    GrainBuds,
    GrainInEar,
    SummerSolstice,
    MinorHeat,
    MajorHeat,
    StartOfAutumn,
    EndOfHeat,
    WhiteDew,
    AutumnEquinox,
    ColdDew,
    FrostsDescent,
    StartOfWinter,
    MinorSnow,
    MajorSnow,
    WinterSolstice,
    MinorCold,
    MajorCold,
    StartOfSpring,
    RainWater,
    AwakeningOfInsects,
}

/// All 24 terms in longitude order (index 0 = Spring Equinox at 0°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::SpringEquinox,
    SolarTerm::ClearAndBright,
    SolarTerm::GrainRain,
    SolarTerm::StartOfSummer,
    SolarTerm::GrainBuds,
    SolarTerm::GrainInEar,
    SolarTerm::SummerSolstice,
    SolarTerm::MinorHeat,
    SolarTerm::MajorHeat,
    SolarTerm::StartOfAutumn,
    SolarTerm::EndOfHeat,
    SolarTerm::WhiteDew,
    SolarTerm::AutumnEquinox,
    SolarTerm::ColdDew,
    SolarTerm::FrostsDescent,
    SolarTerm::StartOfWinter,
    SolarTerm::MinorSnow,
    SolarTerm::MajorSnow,
    SolarTerm::WinterSolstice,
    SolarTerm::MinorCold,
    SolarTerm::MajorCold,
    SolarTerm::StartOfSpring,
    SolarTerm::RainWater,
    SolarTerm::AwakeningOfInsects,
];

const CHINESE: [&str; 24] = [
    "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑", "白露",
    "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰",
];

const ENGLISH: [&str; 24] = [
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Buds",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
];

const VIETNAMESE: [&str; 24] = [
    "Xuân Phân",
    "Thanh Minh",
    "Cốc Vũ",
    "Lập Hạ",
    "Tiểu Mãn",
    "Mang Chủng",
    "Hạ Chí",
    "Tiểu Thử",
    "Đại Thử",
    "Lập Thu",
    "Xử Thử",
    "Bạch Lộ",
    "Thu Phân",
    "Hàn Lộ",
    "Sương Giáng",
    "Lập Đông",
    "Tiểu Tuyết",
    "Đại Tuyết",
    "Đông Chí",
    "Tiểu Hàn",
    "Đại Hàn",
    "Lập Xuân",
    "Vũ Thủy",
    "Kinh Trập",
];

impl SolarTerm {
    /// 0-based index (Spring Equinox = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Sun longitude at which this term begins.
    pub const fn longitude_deg(self) -> f64 {
        self.index() as f64 * 15.0
    }

    /// Principal terms (中气) sit on even indices.
    pub const fn is_principal(self) -> bool {
        self.index() % 2 == 0
    }

    /// Principal-term number Z1..Z12 (Z11 = Winter Solstice), or `None` for
    /// the twelve sectional terms.
    pub const fn principal_number(self) -> Option<u8> {
        if !self.is_principal() {
            return None;
        }
        let z = self.index() / 2 + 2;
        Some(if z > 12 { z - 12 } else { z })
    }

    pub const fn chinese(self) -> &'static str {
        CHINESE[self.index() as usize]
    }

    pub const fn english(self) -> &'static str {
        ENGLISH[self.index() as usize]
    }

    pub const fn vietnamese(self) -> &'static str {
        VIETNAMESE[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.english(),
            Language::Vietnamese => self.vietnamese(),
        }
    }
}

impl TryFrom<u8> for SolarTerm {
    type Error = LookupError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or_else(|| LookupError::UnknownLabel(format!("solar term {index}")))
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(t.longitude_deg(), i as f64 * 15.0);
        }
    }

    #[test]
    fn winter_solstice_is_z11() {
        assert_eq!(SolarTerm::WinterSolstice.index(), 18);
        assert_eq!(SolarTerm::WinterSolstice.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::WinterSolstice.principal_number(), Some(11));
    }

    #[test]
    fn principal_numbers_cover_1_to_12() {
        let mut zs: Vec<u8> = ALL_SOLAR_TERMS
            .iter()
            .filter_map(|t| t.principal_number())
            .collect();
        zs.sort_unstable();
        assert_eq!(zs, (1..=12).collect::<Vec<u8>>());
        assert_eq!(SolarTerm::SpringEquinox.principal_number(), Some(2));
        assert_eq!(SolarTerm::RainWater.principal_number(), Some(1));
        assert_eq!(SolarTerm::MajorCold.principal_number(), Some(12));
        assert_eq!(SolarTerm::StartOfSpring.principal_number(), None);
    }

    #[test]
    fn out_of_range() {
        assert!(SolarTerm::try_from(24).is_err());
        assert_eq!(SolarTerm::try_from(21), Ok(SolarTerm::StartOfSpring));
    }

    #[test]
    fn labels() {
        assert_eq!(SolarTerm::StartOfSpring.chinese(), "立春");
        assert_eq!(SolarTerm::WinterSolstice.label(Language::Vietnamese), "Đông Chí");
        assert_eq!(SolarTerm::FrostsDescent.to_string(), "Frost's Descent");
    }
}
