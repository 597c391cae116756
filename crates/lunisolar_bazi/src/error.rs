//! Error types for chart construction.

use thiserror::Error;

use lunisolar_base::LookupError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// A chart needs exactly four pillars.
    #[error("expected 4 pillars, got {0}")]
    PillarCount(usize),
    #[error("unknown gender: {0:?}")]
    Gender(String),
}
