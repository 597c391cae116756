//! The ten Heavenly Stems (天干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::LookupError;
use crate::language::Language;

/// Heavenly Stem, index 0 (甲) through 9 (癸).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All ten stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const CHINESE: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];
const VIETNAMESE: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// Five Combinations (天干五合): unordered stem pairs and the element they transform into.
pub const STEM_COMBINATIONS: [(HeavenlyStem, HeavenlyStem, Element); 5] = [
    (HeavenlyStem::Jia, HeavenlyStem::Ji, Element::Earth),
    (HeavenlyStem::Yi, HeavenlyStem::Geng, Element::Metal),
    (HeavenlyStem::Bing, HeavenlyStem::Xin, Element::Water),
    (HeavenlyStem::Ding, HeavenlyStem::Ren, Element::Wood),
    (HeavenlyStem::Wu, HeavenlyStem::Gui, Element::Fire),
];

impl HeavenlyStem {
    /// 0-based index (Jia = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for a 0-based index, or `None` if out of range.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem for any integer, wrapping modulo 10.
    pub const fn wrapping(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Two stems per element, in production order.
    pub const fn element(self) -> Element {
        crate::element::ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub const fn chinese(self) -> &'static str {
        CHINESE[self.index() as usize]
    }

    pub const fn pinyin(self) -> &'static str {
        PINYIN[self.index() as usize]
    }

    pub const fn vietnamese(self) -> &'static str {
        VIETNAMESE[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.pinyin(),
            Language::Vietnamese => self.vietnamese(),
        }
    }
}

impl TryFrom<u8> for HeavenlyStem {
    type Error = LookupError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(LookupError::StemOutOfRange(index))
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// Parses a Chinese character, pinyin, or Vietnamese name (case-insensitive).
impl FromStr for HeavenlyStem {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| {
                stem.chinese() == s
                    || stem.pinyin().eq_ignore_ascii_case(s)
                    || stem.vietnamese().to_lowercase() == s.to_lowercase()
            })
            .ok_or_else(|| LookupError::UnknownLabel(s.to_string()))
    }
}

/// Element produced when two stems combine, if they form one of the Five Combinations.
pub fn stem_combination(a: HeavenlyStem, b: HeavenlyStem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| (a == x && b == y) || (a == y && b == x))
        .map(|&(_, _, element)| element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn elements_and_polarity() {
        let expected = [
            Element::Wood,
            Element::Wood,
            Element::Fire,
            Element::Fire,
            Element::Earth,
            Element::Earth,
            Element::Metal,
            Element::Metal,
            Element::Water,
            Element::Water,
        ];
        for (s, e) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(s.element(), e);
        }
        assert_eq!(HeavenlyStem::Jia.polarity(), Polarity::Yang);
        assert_eq!(HeavenlyStem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn out_of_range_index() {
        assert_eq!(HeavenlyStem::try_from(10), Err(LookupError::StemOutOfRange(10)));
        assert_eq!(HeavenlyStem::try_from(9), Ok(HeavenlyStem::Gui));
    }

    #[test]
    fn wrapping_handles_negative() {
        assert_eq!(HeavenlyStem::wrapping(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::wrapping(23), HeavenlyStem::Ding);
    }

    #[test]
    fn parse_any_language() {
        assert_eq!("丙".parse::<HeavenlyStem>().unwrap(), HeavenlyStem::Bing);
        assert_eq!("geng".parse::<HeavenlyStem>().unwrap(), HeavenlyStem::Geng);
        assert_eq!("Nhâm".parse::<HeavenlyStem>().unwrap(), HeavenlyStem::Ren);
        assert!("子".parse::<HeavenlyStem>().is_err());
    }

    #[test]
    fn five_combinations_are_unordered() {
        assert_eq!(stem_combination(HeavenlyStem::Jia, HeavenlyStem::Ji), Some(Element::Earth));
        assert_eq!(stem_combination(HeavenlyStem::Ji, HeavenlyStem::Jia), Some(Element::Earth));
        assert_eq!(stem_combination(HeavenlyStem::Gui, HeavenlyStem::Wu), Some(Element::Fire));
        assert_eq!(stem_combination(HeavenlyStem::Jia, HeavenlyStem::Yi), None);
        assert_eq!(stem_combination(HeavenlyStem::Jia, HeavenlyStem::Jia), None);
    }

    #[test]
    fn combinations_pair_stems_five_apart() {
        for &(a, b, _) in &STEM_COMBINATIONS {
            assert_eq!(b.index() - a.index(), 5);
        }
    }
}
