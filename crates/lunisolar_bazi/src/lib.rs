//! Four Pillars (八字) relation analysis.
//!
//! This crate provides:
//! - The chart model: four stem-branch pillars with the Day Master in the Day pillar
//! - Heavenly Stem combinations and scored transformations
//! - Earthly Branch combinations, clashes, punishments, harms and three-branch combinations
//! - Recurrence of a dynamic pillar against the natal chart
//! - Ten Gods, Longevity stages, Na Yin, void branches and an element tally per chart
//! - Day Master strength, rooting and symbolic stars
//! - Ten-year luck pillars with their start age
//!
//! All detectors are pure. Each returns a `Vec`; the `_iter` variants are lazy
//! so a caller can stop early with `.take(n)` without changing the order.

pub mod chart;
pub mod error;
pub mod interactions;
pub mod luck_pillars;
pub mod profile;
pub mod recurrence;
pub mod strength;
pub mod symbolic_stars;
pub mod transformations;

pub use chart::{ALL_POSITIONS, FourPillars, Pillar, PillarPosition};
pub use error::BaziError;
pub use interactions::{
    ALL_INTERACTION_KINDS, BranchInteraction, InteractionKind, TrioCombination, TrioKind,
    detect_branch_interactions, detect_branch_interactions_iter, detect_punishments,
    detect_punishments_iter, detect_trio_combinations, pair_severity,
};
pub use luck_pillars::{
    DEFAULT_LUCK_PILLARS, Gender, LuckAge, LuckDirection, LuckPillar, LuckStart,
    find_governing_jie_term, generate_luck_pillars, luck_direction, luck_start_age,
    luck_start_from_terms,
};
pub use profile::{
    ChartAnalysis, ElementTally, PillarProfile, VoidBranches, analyze_chart, longevity_stages,
    na_yin_per_pillar, ten_gods, void_branches,
};
pub use recurrence::{RecurrenceEvent, RecurrenceMatch, detect_recurrence, detect_recurrence_iter};
pub use strength::{
    DayMasterRooting, DayMasterScore, DayMasterStrength, RootClass, analyze_rooting, is_jian_lu,
    is_yang_ren, score_day_master, score_day_master_with, seasonal_strength,
};
pub use symbolic_stars::{Star, StarNature, SymbolicStar, detect_symbolic_stars};
pub use transformations::{
    StemCombination, Transformation, TransformationStatus, detect_stem_combinations,
    detect_stem_combinations_iter, detect_transformations, detect_transformations_iter,
};
