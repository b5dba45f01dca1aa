//! Normalized severity and age-distribution rows.
//!
//! These are the *validated* shapes — what the cross-table validator in
//! `ep-params` produces and the simulation engine consumes.  The editable
//! form rows (with possibly missing or non-numeric cells) live in
//! `ep-params`.

use serde::{Deserialize, Serialize};

use crate::age::AgeGroup;

/// One row of the severity table.  All five fields are percentages in
/// `0..=100`.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityDistributionDatum {
    pub age_group: AgeGroup,
    pub confirmed: f64,
    pub severe: f64,
    pub critical: f64,
    pub fatal: f64,
    pub isolated: f64,
}

/// One row of the age-distribution table.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeDistributionDatum {
    pub age_group: AgeGroup,
    pub population: u64,
}
