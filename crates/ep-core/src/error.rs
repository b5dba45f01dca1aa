//! Shared error type.
//!
//! Sub-crates define their own error enums for their recoverable outcomes
//! (schema violations, import failures, cell errors) and keep them separate;
//! `EpError` covers the faults that cross crate boundaries.

use thiserror::Error;

/// The top-level error type for `ep-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpError {
    /// A scenario name was looked up that the bundled dataset does not
    /// contain.  There is no safe default scenario, so this is not tolerated
    /// the way an unknown case-count region is.
    #[error("scenario {0:?} not found in the bundled dataset")]
    ScenarioNotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `ep-*` crates.
pub type EpResult<T> = Result<T, EpError>;
