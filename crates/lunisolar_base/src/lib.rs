//! Fixed tables of the stem-branch system.
//!
//! This crate provides:
//! - The 10 Heavenly Stems and 12 Earthly Branches with element, polarity and hidden stems
//! - Five-element production/control cycles and the relation between two elements
//! - The 60-term sexagenary cycle (`GanZhi`) and its Na Yin labels
//! - Ten Gods and the Twelve Longevity Stages
//! - Chinese, English and Vietnamese labels
//!
//! Every table is a `const`; nothing here allocates or mutates.

pub mod branch;
pub mod element;
pub mod error;
pub mod language;
pub mod longevity;
pub mod nayin;
pub mod sexagenary;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, ElementRelation, Polarity, element_relation};
pub use error::LookupError;
pub use language::Language;
pub use longevity::{ALL_LONGEVITY_STAGES, LongevityStage, longevity_stage};
pub use nayin::{NaYin, na_yin};
pub use sexagenary::{GanZhi, cycle_from};
pub use stem::{ALL_STEMS, HeavenlyStem, stem_combination};
pub use ten_god::{ALL_TEN_GODS, TenGod, ten_god};
