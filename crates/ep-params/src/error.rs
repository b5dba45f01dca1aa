//! Validation error records.

use std::fmt;

use thiserror::Error;

use ep_core::AgeGroup;

/// Why one cell failed.  The `Display` strings are the user-facing messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("Required")]
    Required,

    #[error("Percentage should be a number")]
    PercentageNotANumber,

    #[error("Percentage should be non-negative")]
    PercentageNegative,

    #[error("Percentage cannot be greater than 100")]
    PercentageAbove100,

    #[error("This value should be an integer")]
    NotAnInteger,

    #[error("This value should be non-negative")]
    NegativeValue,
}

/// Column identifiers across both tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Confirmed,
    Severe,
    Critical,
    Fatal,
    Isolated,
    Population,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Confirmed => "confirmed",
            Column::Severe => "severe",
            Column::Critical => "critical",
            Column::Fatal => "fatal",
            Column::Isolated => "isolated",
            Column::Population => "population",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One violated rule, keyed by (age group, column).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("Error in row \"{age_group}\", column \"{column}\": {error}")]
pub struct AgeGroupParameterError {
    pub age_group: AgeGroup,
    pub column: Column,
    pub error: CellError,
}

/// The two tables do not cover the same age bands in the same order.
///
/// Reported once per validation, above the per-cell errors — a row missing
/// from one table is a structural defect, not a bad cell.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("severity rows {severity:?} do not match age distribution rows {age_distribution:?}")]
pub struct AgeGroupMismatch {
    pub severity: Vec<AgeGroup>,
    pub age_distribution: Vec<AgeGroup>,
}
