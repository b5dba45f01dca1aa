//! Editable table rows.
//!
//! These wrap the normalized rows of `ep-core` in form-cell values, so a
//! half-typed table can be represented and validated without losing what the
//! user actually entered.

use ep_core::{AgeDistributionDatum, AgeGroup, SeverityDistributionDatum};

use crate::cell::CellValue;

/// One severity-table row under edit.
#[derive(Clone, Debug, PartialEq)]
pub struct SeverityRowInput {
    pub age_group: AgeGroup,
    pub confirmed: CellValue,
    pub severe: CellValue,
    pub critical: CellValue,
    pub fatal: CellValue,
    pub isolated: CellValue,
}

/// One age-distribution row under edit.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeDistributionRowInput {
    pub age_group: AgeGroup,
    pub population: CellValue,
}

impl From<&SeverityDistributionDatum> for SeverityRowInput {
    fn from(datum: &SeverityDistributionDatum) -> Self {
        Self {
            age_group: datum.age_group,
            confirmed: datum.confirmed.into(),
            severe: datum.severe.into(),
            critical: datum.critical.into(),
            fatal: datum.fatal.into(),
            isolated: datum.isolated.into(),
        }
    }
}

impl From<&AgeDistributionDatum> for AgeDistributionRowInput {
    fn from(datum: &AgeDistributionDatum) -> Self {
        Self {
            age_group: datum.age_group,
            population: datum.population.into(),
        }
    }
}
