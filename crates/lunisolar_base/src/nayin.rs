//! Na Yin (纳音): the sound-element assigned to each pair of cycle positions.

use serde::Serialize;

use crate::element::Element;
use crate::error::LookupError;
use crate::language::Language;
use crate::sexagenary::GanZhi;

/// One Na Yin entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NaYin {
    pub element: Element,
    pub chinese: &'static str,
    pub english: &'static str,
    pub vietnamese: &'static str,
}

impl NaYin {
    pub const fn label(&self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese,
            Language::English => self.english,
            Language::Vietnamese => self.vietnamese,
        }
    }
}

const fn entry(
    element: Element,
    chinese: &'static str,
    english: &'static str,
    vietnamese: &'static str,
) -> NaYin {
    NaYin {
        element,
        chinese,
        english,
        vietnamese,
    }
}

use Element::{Earth, Fire, Metal, Water, Wood};

/// Indexed by `(cycle - 1) / 2`; cycles 1-2 share entry 0, and so on.
#[rustfmt::skip]
static NAYIN: [NaYin; 30] = [
    entry(Metal, "海中金", "Sea Metal", "Hải Trung Kim"),
    entry(Fire,  "爐中火", "Furnace Fire", "Lư Trung Hỏa"),
    entry(Wood,  "大林木", "Great Forest Wood", "Đại Lâm Mộc"),
    entry(Earth, "路旁土", "Roadside Earth", "Lộ Bàng Thổ"),
    entry(Metal, "劍鋒金", "Sword-Point Metal", "Kiếm Phong Kim"),
    entry(Fire,  "山头火", "Mountain-Top Fire", "Sơn Đầu Hỏa"),
    entry(Water, "澗下水", "Ravine Water", "Giản Hạ Thuỷ"),
    entry(Earth, "城头土", "City Wall Earth", "Thành Đầu Thổ"),
    entry(Metal, "白蜡金", "White Wax Metal", "Bạch Lạp Kim"),
    entry(Wood,  "杨柳木", "Willow Wood", "Dương Liễu Mộc"),
    entry(Water, "井泉水", "Well Spring Water", "Tỉnh Tuyền Thủy"),
    entry(Earth, "屋上土", "Rooftop Earth", "Ốc Thượng Thổ"),
    entry(Fire,  "霹雳火", "Thunderbolt Fire", "Tích Lịch Hỏa"),
    entry(Wood,  "松柏木", "Pine & Cypress Wood", "Tùng Bách Mộc"),
    entry(Water, "长流水", "Long Flowing Water", "Trường Lưu Thủy"),
    entry(Metal, "砂中金", "Sand-Middle Metal", "Sa Thạch Kim"),
    entry(Fire,  "山下火", "Mountain-Base Fire", "Sơn Hạ Hỏa"),
    entry(Wood,  "平地木", "Flat Land Wood", "Bình Địa Mộc"),
    entry(Earth, "壁上土", "Wall Earth", "Bích Thượng Thổ"),
    entry(Metal, "金箔金", "Gold Foil Metal", "Kim Bạc Kim"),
    entry(Fire,  "覆灯火", "Covered Lamp Fire", "Phúc Đăng Hỏa"),
    entry(Water, "天河水", "Sky River Water", "Thiên Hà Thủy"),
    entry(Earth, "大驿土", "Great Post Earth", "Đại Dịch Thổ"),
    entry(Metal, "钗钏金", "Hairpin Metal", "Thoa Xuyến Kim"),
    entry(Wood,  "桑柘木", "Mulberry Wood", "Tang Chá Mộc"),
    entry(Water, "大溪水", "Great Stream Water", "Đại Khê Thủy"),
    entry(Earth, "沙中土", "Sand Earth", "Sa Trung Thổ"),
    entry(Fire,  "天上火", "Heavenly Fire", "Thiên Thượng Hỏa"),
    entry(Wood,  "石榴木", "Pomegranate Wood", "Thạch Lựu Mộc"),
    entry(Water, "大海水", "Great Ocean Water", "Đại Hải Thủy"),
];

/// Na Yin for a 1-based cycle number.
pub fn na_yin(cycle: u8) -> Result<&'static NaYin, LookupError> {
    if cycle == 0 || cycle > 60 {
        return Err(LookupError::CycleOutOfRange(cycle));
    }
    Ok(&NAYIN[((cycle - 1) / 2) as usize])
}

impl GanZhi {
    pub fn na_yin(self) -> &'static NaYin {
        &NAYIN[((self.cycle() - 1) / 2) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(na_yin(1).unwrap().chinese, "海中金");
        assert_eq!(na_yin(60).unwrap().english, "Great Ocean Water");
    }

    #[test]
    fn pairs_share_entries() {
        for c in (1..=59u8).step_by(2) {
            assert_eq!(na_yin(c).unwrap(), na_yin(c + 1).unwrap());
        }
        assert_ne!(na_yin(2).unwrap(), na_yin(3).unwrap());
    }

    #[test]
    fn out_of_range() {
        assert_eq!(na_yin(0), Err(LookupError::CycleOutOfRange(0)));
        assert_eq!(na_yin(61), Err(LookupError::CycleOutOfRange(61)));
    }

    #[test]
    fn ganzhi_method_agrees() {
        for c in 1..=60u8 {
            let gz = GanZhi::from_cycle(c).unwrap();
            assert_eq!(gz.na_yin(), na_yin(c).unwrap());
        }
    }

    #[test]
    fn each_element_appears_six_times() {
        for e in crate::element::ALL_ELEMENTS {
            assert_eq!(NAYIN.iter().filter(|n| n.element == e).count(), 6, "{e}");
        }
    }

    #[test]
    fn year_2024_is_lamp_fire() {
        // 甲辰 (cycle 41)
        let n = na_yin(41).unwrap();
        assert_eq!(n.element, Element::Fire);
        assert_eq!(n.label(Language::Vietnamese), "Phúc Đăng Hỏa");
    }
}
