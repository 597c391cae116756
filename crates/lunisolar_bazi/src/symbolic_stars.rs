//! Symbolic stars (神煞) keyed on the Day Master, Year branch or Day branch.

use serde::Serialize;

use lunisolar_base::{EarthlyBranch, HeavenlyStem, Language};

use crate::chart::{FourPillars, PillarPosition};

use EarthlyBranch::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StarNature {
    Auspicious,
    Neutral,
    Mixed,
    Inauspicious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Star {
    /// 天乙贵人, from the Day Master.
    Nobleman,
    /// 文昌, from the Day Master.
    Academic,
    /// 桃花, from the Year or Day branch.
    PeachBlossom,
    /// 驿马, from the Year or Day branch.
    TravelHorse,
    /// 将星, from the Year or Day branch.
    General,
    /// 华盖, from the Year or Day branch.
    Canopy,
    /// 羊刃, from the Day Master.
    GoatBlade,
    /// 禄神, from the Day Master.
    Prosperity,
    /// 红鸾, from the Year branch.
    RedCloud,
    /// 血刃, from the Day branch.
    BloodKnife,
    /// 空亡 of the Day pillar.
    Void,
}

impl Star {
    pub const fn nature(self) -> StarNature {
        match self {
            Self::Nobleman | Self::Academic | Self::General | Self::Prosperity => {
                StarNature::Auspicious
            }
            Self::TravelHorse => StarNature::Neutral,
            Self::PeachBlossom | Self::Canopy | Self::RedCloud => StarNature::Mixed,
            Self::GoatBlade | Self::BloodKnife | Self::Void => StarNature::Inauspicious,
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => match self {
                Self::Nobleman => "天乙贵人",
                Self::Academic => "文昌",
                Self::PeachBlossom => "桃花",
                Self::TravelHorse => "驿马",
                Self::General => "将星",
                Self::Canopy => "华盖",
                Self::GoatBlade => "羊刃",
                Self::Prosperity => "禄神",
                Self::RedCloud => "红鸾",
                Self::BloodKnife => "血刃",
                Self::Void => "空亡",
            },
            Language::English => match self {
                Self::Nobleman => "Nobleman",
                Self::Academic => "Academic Star",
                Self::PeachBlossom => "Peach Blossom",
                Self::TravelHorse => "Travel Horse",
                Self::General => "General Star",
                Self::Canopy => "Canopy Star",
                Self::GoatBlade => "Goat Blade",
                Self::Prosperity => "Prosperity Star",
                Self::RedCloud => "Red Cloud",
                Self::BloodKnife => "Blood Knife",
                Self::Void => "Void",
            },
            Language::Vietnamese => match self {
                Self::Nobleman => "Thiên Ất Quý Nhân",
                Self::Academic => "Văn Xương",
                Self::PeachBlossom => "Đào Hoa",
                Self::TravelHorse => "Dịch Mã",
                Self::General => "Tướng Tinh",
                Self::Canopy => "Hoa Cái",
                Self::GoatBlade => "Dương Nhận",
                Self::Prosperity => "Lộc Thần",
                Self::RedCloud => "Hồng Loan",
                Self::BloodKnife => "Huyết Nhận",
                Self::Void => "Không Vong",
            },
        }
    }
}

// Stem-keyed tables, by stem index.
#[rustfmt::skip]
const NOBLEMAN: [[EarthlyBranch; 2]; 10] = [
    [Chou, Wei], [Zi, Shen], [Hai, You], [Hai, You], [Chou, Wei],
    [Zi, Shen],  [Chou, Wei], [Wu, Yin], [Mao, Si],  [Mao, Si],
];
const ACADEMIC: [EarthlyBranch; 10] = [Si, Wu, Shen, You, Shen, You, Hai, Zi, Yin, Mao];
const GOAT_BLADE: [EarthlyBranch; 10] = [Mao, Chen, Wu, Wei, Wu, Wei, You, Xu, Zi, Chou];
const PROSPERITY: [EarthlyBranch; 10] = [Yin, Mao, Si, Wu, Si, Wu, Shen, You, Hai, Zi];

// Branch-keyed tables, by branch index.
#[rustfmt::skip]
const PEACH_BLOSSOM: [EarthlyBranch; 12] = [You, Wu, Mao, Zi, You, Wu, Mao, Zi, You, Wu, Mao, Zi];
#[rustfmt::skip]
const TRAVEL_HORSE: [EarthlyBranch; 12] = [Yin, Hai, Shen, Si, Yin, Hai, Shen, Si, Yin, Hai, Shen, Si];
#[rustfmt::skip]
const GENERAL: [EarthlyBranch; 12] = [Zi, You, Wu, Mao, Zi, You, Wu, Mao, Zi, You, Wu, Mao];
#[rustfmt::skip]
const CANOPY: [EarthlyBranch; 12] = [Chen, Chou, Xu, Wei, Chen, Chou, Xu, Wei, Chen, Chou, Xu, Wei];
#[rustfmt::skip]
const RED_CLOUD: [EarthlyBranch; 12] = [Mao, Yin, Chou, Zi, Hai, Xu, You, Shen, Wei, Wu, Si, Chen];
#[rustfmt::skip]
const BLOOD_KNIFE: [EarthlyBranch; 12] = [Xu, You, Shen, Wei, Wu, Si, Chen, Mao, Yin, Chou, Zi, Hai];

const fn by_stem<T: Copy>(table: &[T; 10], stem: HeavenlyStem) -> T {
    table[stem.index() as usize]
}

const fn by_branch(table: &[EarthlyBranch; 12], branch: EarthlyBranch) -> EarthlyBranch {
    table[branch.index() as usize]
}

/// A star landing on one pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolicStar {
    pub star: Star,
    pub position: PillarPosition,
    pub nature: StarNature,
}

/// Stars per pillar in chart order, then void hits. Each star appears at most
/// once per pillar.
pub fn detect_symbolic_stars(chart: &FourPillars) -> Vec<SymbolicStar> {
    let dm = chart.day_master();
    let year = chart.year().branch;
    let day = chart.day().branch;
    let from_year_or_day = |table: &[EarthlyBranch; 12], b: EarthlyBranch| {
        by_branch(table, year) == b || by_branch(table, day) == b
    };

    let mut out: Vec<SymbolicStar> = Vec::new();
    let mut push = |star: Star, position: PillarPosition| {
        if !out.iter().any(|s| s.star == star && s.position == position) {
            out.push(SymbolicStar {
                star,
                position,
                nature: star.nature(),
            });
        }
    };

    for (position, p) in chart.iter() {
        let b = p.branch;
        let checks = [
            (Star::Nobleman, by_stem(&NOBLEMAN, dm).contains(&b)),
            (Star::Academic, by_stem(&ACADEMIC, dm) == b),
            (Star::PeachBlossom, from_year_or_day(&PEACH_BLOSSOM, b)),
            (Star::TravelHorse, from_year_or_day(&TRAVEL_HORSE, b)),
            (Star::General, from_year_or_day(&GENERAL, b)),
            (Star::Canopy, from_year_or_day(&CANOPY, b)),
            (Star::GoatBlade, by_stem(&GOAT_BLADE, dm) == b),
            (Star::Prosperity, by_stem(&PROSPERITY, dm) == b),
            (Star::RedCloud, by_branch(&RED_CLOUD, year) == b),
            (Star::BloodKnife, by_branch(&BLOOD_KNIFE, day) == b),
        ];
        for (star, hit) in checks {
            if hit {
                push(star, position);
            }
        }
    }

    if let Some(day_pillar) = chart.day().ganzhi() {
        let void = day_pillar.void_branches();
        for (position, p) in chart.iter() {
            if void.contains(&p.branch) {
                push(Star::Void, position);
            }
        }
    }
    out
}
