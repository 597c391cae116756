//! Ten Gods (十神): the role of a stem relative to the Day Master.
//!
//! Relation family (five) crossed with same/different polarity (two).

use serde::Serialize;

use crate::element::{ElementRelation, element_relation};
use crate::language::Language;
use crate::stem::HeavenlyStem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Companion,
    /// 劫财: same element, different polarity.
    RobWealth,
    /// 偏印
    IndirectResource,
    /// 正印
    DirectResource,
    /// 食神
    EatingGod,
    /// 伤官
    HurtingOfficer,
    /// 偏财
    IndirectWealth,
    /// 正财
    DirectWealth,
    /// 七杀
    SevenKillings,
    /// 正官
    DirectOfficer,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::IndirectResource,
    TenGod::DirectResource,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
];

impl TenGod {
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫财",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
        }
    }

    pub const fn english(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "Rob Wealth",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
        }
    }

    pub const fn vietnamese(self) -> &'static str {
        match self {
            Self::Companion => "Tỷ Kiên",
            Self::RobWealth => "Kiếp Tài",
            Self::IndirectResource => "Thiên Ấn",
            Self::DirectResource => "Chính Ấn",
            Self::EatingGod => "Thực Thần",
            Self::HurtingOfficer => "Thương Quan",
            Self::IndirectWealth => "Thiên Tài",
            Self::DirectWealth => "Chính Tài",
            Self::SevenKillings => "Thất Sát",
            Self::DirectOfficer => "Chính Quan",
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.english(),
            Language::Vietnamese => self.vietnamese(),
        }
    }

    /// The element relation family this god belongs to.
    pub const fn relation(self) -> ElementRelation {
        match self {
            Self::Companion | Self::RobWealth => ElementRelation::Same,
            Self::IndirectResource | Self::DirectResource => ElementRelation::Generates,
            Self::EatingGod | Self::HurtingOfficer => ElementRelation::GeneratedBy,
            Self::IndirectWealth | Self::DirectWealth => ElementRelation::Controls,
            Self::SevenKillings | Self::DirectOfficer => ElementRelation::ControlledBy,
        }
    }
}

/// Ten God of `other` relative to the Day Master stem `day_master`.
pub const fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let same_polarity = day_master.index() % 2 == other.index() % 2;
    match (element_relation(day_master.element(), other.element()), same_polarity) {
        (ElementRelation::Same, true) => TenGod::Companion,
        (ElementRelation::Same, false) => TenGod::RobWealth,
        (ElementRelation::Generates, true) => TenGod::IndirectResource,
        (ElementRelation::Generates, false) => TenGod::DirectResource,
        (ElementRelation::GeneratedBy, true) => TenGod::EatingGod,
        (ElementRelation::GeneratedBy, false) => TenGod::HurtingOfficer,
        (ElementRelation::Controls, true) => TenGod::IndirectWealth,
        (ElementRelation::Controls, false) => TenGod::DirectWealth,
        (ElementRelation::ControlledBy, true) => TenGod::SevenKillings,
        (ElementRelation::ControlledBy, false) => TenGod::DirectOfficer,
    }
}
