//! The twelve Earthly Branches (地支) and their hidden stems (藏干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, Polarity};
use crate::error::LookupError;
use crate::language::Language;
use crate::stem::HeavenlyStem;

/// Earthly Branch, index 0 (子) through 11 (亥).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All twelve branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const CHINESE: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
const VIETNAMESE: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];
const ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

const ELEMENTS: [Element; 12] = [
    Element::Water,
    Element::Earth,
    Element::Wood,
    Element::Wood,
    Element::Earth,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Earth,
    Element::Water,
];

use HeavenlyStem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};

/// Hidden stems per branch: main qi first, then middle and residual where present.
#[rustfmt::skip]
const HIDDEN_STEMS: [&[HeavenlyStem]; 12] = [
    &[Gui],             // 子
    &[Ji, Gui, Xin],    // 丑
    &[Jia, Bing, Wu],   // 寅
    &[Yi],              // 卯
    &[Wu, Yi, Gui],     // 辰
    &[Bing, Wu, Geng],  // 巳
    &[Ding, Ji],        // 午
    &[Ji, Ding, Yi],    // 未
    &[Geng, Ren, Wu],   // 申
    &[Xin],             // 酉
    &[Wu, Xin, Ding],   // 戌
    &[Ren, Jia],        // 亥
];

impl EarthlyBranch {
    /// 0-based index (Zi = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch for any integer, wrapping modulo 12.
    pub const fn wrapping(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    pub const fn element(self) -> Element {
        ELEMENTS[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Hidden stems, main qi first (one to three entries).
    pub const fn hidden_stems(self) -> &'static [HeavenlyStem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// The main-qi hidden stem.
    pub const fn main_stem(self) -> HeavenlyStem {
        HIDDEN_STEMS[self.index() as usize][0]
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

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.pinyin(),
            Language::Vietnamese => self.vietnamese(),
        }
    }

    /// Forward distance from `self` to `other`, in 0..12.
    pub const fn steps_to(self, other: EarthlyBranch) -> u8 {
        (other.index() + 12 - self.index()) % 12
    }
}

impl TryFrom<u8> for EarthlyBranch {
    type Error = LookupError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(LookupError::BranchOutOfRange(index))
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

impl FromStr for EarthlyBranch {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| {
                b.chinese() == s
                    || b.pinyin().eq_ignore_ascii_case(s)
                    || b.vietnamese().to_lowercase() == s.to_lowercase()
            })
            .ok_or_else(|| LookupError::UnknownLabel(s.to_string()))
    }
}
