//! Day classification: the twelve construction stars (建除十二神) and the
//! yellow/black path spirits (黄道黑道).

use std::fmt::{Display, Formatter};

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, Language};

// ---------------------------------------------------------------------------
// Construction stars
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum ConstructionStar {
    Establish,
    Remove,
    Full,
    Balance,
    Stable,
    Initiate,
    Destruction,
    Danger,
    Success,
    Receive,
    Open,
    Close,
}

pub const ALL_CONSTRUCTION_STARS: [ConstructionStar; 12] = [
    ConstructionStar::Establish,
    ConstructionStar::Remove,
    ConstructionStar::Full,
    ConstructionStar::Balance,
    ConstructionStar::Stable,
    ConstructionStar::Initiate,
    ConstructionStar::Destruction,
    ConstructionStar::Danger,
    ConstructionStar::Success,
    ConstructionStar::Receive,
    ConstructionStar::Open,
    ConstructionStar::Close,
];

#[rustfmt::skip]
const STAR_LABELS: [[&str; 3]; 12] = [
    ["建", "Establish",   "Kiến"],
    ["除", "Remove",      "Trừ"],
    ["满", "Full",        "Mãn"],
    ["平", "Balance",     "Bình"],
    ["定", "Stable",      "Định"],
    ["执", "Initiate",    "Chấp"],
    ["破", "Destruction", "Phá"],
    ["危", "Danger",      "Nguy"],
    ["成", "Success",     "Thành"],
    ["收", "Receive",     "Thu"],
    ["开", "Open",        "Khai"],
    ["闭", "Close",       "Bế"],
];

impl ConstructionStar {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Star governing a day: the Establish star falls on the month's own
    /// branch (寅 for month 1) and the rest follow in branch order.
    pub const fn for_day(lunar_month: u8, day_branch: EarthlyBranch) -> Self {
        let building = EarthlyBranch::wrapping(lunar_month as i64 + 1);
        ALL_CONSTRUCTION_STARS[building.steps_to(day_branch) as usize]
    }

    pub const fn label(self, lang: Language) -> &'static str {
        STAR_LABELS[self.index() as usize][lang_slot(lang)]
    }
}

impl Display for ConstructionStar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::Chinese))
    }
}

// ---------------------------------------------------------------------------
// Path spirits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub enum YellowPathSpirit {
    AzureDragon,
    BrightHall,
    HeavenlyPunishment,
    VermilionBird,
    GoldenCoffer,
    HeavenlyVirtue,
    WhiteTiger,
    JadeHall,
    HeavenlyPrison,
    BlackTortoise,
    LifeGovernor,
    CurvedArray,
}

pub const ALL_PATH_SPIRITS: [YellowPathSpirit; 12] = [
    YellowPathSpirit::AzureDragon,
    YellowPathSpirit::BrightHall,
    YellowPathSpirit::HeavenlyPunishment,
    YellowPathSpirit::VermilionBird,
    YellowPathSpirit::GoldenCoffer,
    YellowPathSpirit::HeavenlyVirtue,
    YellowPathSpirit::WhiteTiger,
    YellowPathSpirit::JadeHall,
    YellowPathSpirit::HeavenlyPrison,
    YellowPathSpirit::BlackTortoise,
    YellowPathSpirit::LifeGovernor,
    YellowPathSpirit::CurvedArray,
];

#[rustfmt::skip]
const SPIRIT_LABELS: [[&str; 3]; 12] = [
    ["青龙", "Azure Dragon",        "Thanh Long"],
    ["明堂", "Bright Hall",         "Minh Đường"],
    ["天刑", "Heavenly Punishment", "Thiên Hình"],
    ["朱雀", "Vermilion Bird",      "Chu Tước"],
    ["金匮", "Golden Coffer",       "Kim Quỹ"],
    ["天德", "Heavenly Virtue",     "Thiên Đức"],
    ["白虎", "White Tiger",         "Bạch Hổ"],
    ["玉堂", "Jade Hall",           "Ngọc Đường"],
    ["天牢", "Heavenly Prison",     "Thiên Lao"],
    ["玄武", "Black Tortoise",      "Huyền Vũ"],
    ["司命", "Life Governor",       "Tư Mệnh"],
    ["勾陈", "Curved Array",        "Câu Trận"],
];

const AUSPICIOUS: [bool; 12] = [
    true, true, false, false, true, true, false, true, false, false, true, false,
];

impl YellowPathSpirit {
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Spirit governing a day. The Azure Dragon starts at 子 in months 1
    /// and 7 and moves two branches per month.
    pub const fn for_day(lunar_month: u8, day_branch: EarthlyBranch) -> Self {
        let start = EarthlyBranch::wrapping(2 * (lunar_month as i64 - 1));
        ALL_PATH_SPIRITS[start.steps_to(day_branch) as usize]
    }

    pub const fn path(self) -> PathType {
        if AUSPICIOUS[self.index() as usize] {
            PathType::Yellow
        } else {
            PathType::Black
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        SPIRIT_LABELS[self.index() as usize][lang_slot(lang)]
    }
}

impl Display for YellowPathSpirit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Language::Chinese))
    }
}

/// Auspicious (黄道) or inauspicious (黑道) day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathType {
    Yellow,
    Black,
}

impl PathType {
    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Yellow)
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Self::Yellow, Language::Chinese) => "黄道",
            (Self::Yellow, Language::English) => "Yellow Path",
            (Self::Yellow, Language::Vietnamese) => "Hoàng Đạo",
            (Self::Black, Language::Chinese) => "黑道",
            (Self::Black, Language::English) => "Black Path",
            (Self::Black, Language::Vietnamese) => "Hắc Đạo",
        }
    }
}

/// Star, spirit and path of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HuangdaoDay {
    pub star: ConstructionStar,
    pub spirit: YellowPathSpirit,
    pub path: PathType,
}

impl HuangdaoDay {
    pub const fn new(lunar_month: u8, day_branch: EarthlyBranch) -> Self {
        let spirit = YellowPathSpirit::for_day(lunar_month, day_branch);
        Self {
            star: ConstructionStar::for_day(lunar_month, day_branch),
            spirit,
            path: spirit.path(),
        }
    }
}

const fn lang_slot(lang: Language) -> usize {
    match lang {
        Language::Chinese => 0,
        Language::English => 1,
        Language::Vietnamese => 2,
    }
}
