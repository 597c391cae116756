//! Twelve Longevity Stages (十二长生).
//!
//! Each stem begins its Growth stage at a fixed branch. Yang stems advance
//! forward through the branches, Yin stems backward.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::Polarity;
use crate::language::Language;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[allow(missing_docs)]
pub enum LongevityStage {
    Growth,
    Bath,
    CrownBelt,
    ComingOfAge,
    ProsperityPeak,
    Decline,
    Sickness,
    Death,
    Grave,
    Termination,
    Conception,
    Nurture,
}

pub const ALL_LONGEVITY_STAGES: [LongevityStage; 12] = [
    LongevityStage::Growth,
    LongevityStage::Bath,
    LongevityStage::CrownBelt,
    LongevityStage::ComingOfAge,
    LongevityStage::ProsperityPeak,
    LongevityStage::Decline,
    LongevityStage::Sickness,
    LongevityStage::Death,
    LongevityStage::Grave,
    LongevityStage::Termination,
    LongevityStage::Conception,
    LongevityStage::Nurture,
];

const CHINESE: [&str; 12] = [
    "长生", "沐浴", "冠带", "临官", "帝旺", "衰", "病", "死", "墓", "绝", "胎", "养",
];
const ENGLISH: [&str; 12] = [
    "Growth",
    "Bath",
    "Crown Belt",
    "Coming of Age",
    "Prosperity Peak",
    "Decline",
    "Sickness",
    "Death",
    "Grave",
    "Termination",
    "Conception",
    "Nurture",
];
const VIETNAMESE: [&str; 12] = [
    "Trường Sinh",
    "Mộc Dục",
    "Quan Đới",
    "Lâm Quan",
    "Đế Vượng",
    "Suy",
    "Bệnh",
    "Tử",
    "Mộ",
    "Tuyệt",
    "Thai",
    "Dưỡng",
];

/// Branch index of the Growth stage, per stem index.
const GROWTH_BRANCH: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

impl LongevityStage {
    /// 1-based stage number (Growth = 1).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Stages 1 through 5 count as strong.
    pub const fn is_strong(self) -> bool {
        self.number() <= 5
    }

    pub const fn strength_class(self) -> &'static str {
        if self.is_strong() { "strong" } else { "weak" }
    }

    pub const fn chinese(self) -> &'static str {
        CHINESE[self as usize]
    }

    pub const fn english(self) -> &'static str {
        ENGLISH[self as usize]
    }

    pub const fn vietnamese(self) -> &'static str {
        VIETNAMESE[self as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.english(),
            Language::Vietnamese => self.vietnamese(),
        }
    }
}

/// Longevity stage of `stem` at `branch`.
pub const fn longevity_stage(stem: HeavenlyStem, branch: EarthlyBranch) -> LongevityStage {
    let start = GROWTH_BRANCH[stem.index() as usize];
    let b = branch.index();
    let offset = match stem.polarity() {
        Polarity::Yang => (b + 12 - start) % 12,
        Polarity::Yin => (start + 12 - b) % 12,
    };
    ALL_LONGEVITY_STAGES[offset as usize]
}
