//! Error type for raw-index lookups.

use thiserror::Error;

/// A raw index did not name a valid table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LookupError {
    #[error("stem index {0} out of range 0..=9")]
    StemOutOfRange(u8),
    #[error("branch index {0} out of range 0..=11")]
    BranchOutOfRange(u8),
    #[error("sexagenary cycle {0} out of range 1..=60")]
    CycleOutOfRange(u8),
    /// Stem and branch of different parity never pair in the 60-cycle.
    #[error("stem {stem} and branch {branch} differ in parity")]
    ParityMismatch { stem: u8, branch: u8 },
    #[error("unknown label '{0}'")]
    UnknownLabel(String),
}
