//! Five elements (Wu Xing), polarity, and element relations.
//!
//! Production: Wood → Fire → Earth → Metal → Water → Wood.
//! Control:    Wood → Earth → Water → Fire → Metal → Wood.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::language::Language;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in production order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in production order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// The element this one produces.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes.
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn vietnamese(self) -> &'static str {
        match self {
            Self::Wood => "Mộc",
            Self::Fire => "Hỏa",
            Self::Earth => "Thổ",
            Self::Metal => "Kim",
            Self::Water => "Thủy",
        }
    }

    pub const fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::Chinese => self.chinese(),
            Language::English => self.name(),
            Language::Vietnamese => self.vietnamese(),
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/Yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even indices are Yang, odd are Yin.
    pub const fn from_index(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }

    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// Relation of an `other` element to a `reference` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementRelation {
    /// Same element (companion).
    Same,
    /// The other element generates the reference (resource).
    Generates,
    /// The reference generates the other element (output).
    GeneratedBy,
    /// The reference controls the other element (wealth).
    Controls,
    /// The other element controls the reference (power).
    ControlledBy,
}

impl ElementRelation {
    /// The relation seen from the other side.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Same => Self::Same,
            Self::Generates => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generates,
            Self::Controls => Self::ControlledBy,
            Self::ControlledBy => Self::Controls,
        }
    }

    /// Ten-God family name.
    pub const fn family(self) -> &'static str {
        match self {
            Self::Same => "companion",
            Self::Generates => "resource",
            Self::GeneratedBy => "output",
            Self::Controls => "wealth",
            Self::ControlledBy => "power",
        }
    }
}

/// Classify `other` relative to `reference`.
///
/// Any two elements fall into exactly one relation, checked in the order
/// same, resource, output, wealth, power.
pub const fn element_relation(reference: Element, other: Element) -> ElementRelation {
    let r = reference.index();
    let o = other.index();
    if r == o {
        ElementRelation::Same
    } else if other.generates().index() == r {
        ElementRelation::Generates
    } else if reference.generates().index() == o {
        ElementRelation::GeneratedBy
    } else if reference.controls().index() == o {
        ElementRelation::Controls
    } else {
        ElementRelation::ControlledBy
    }
}
