//! Age bands.
//!
//! `AgeGroup` is the join key between the severity table and the
//! age-distribution table.  The set of bands is closed: decade bands from
//! `0-9` through `70-79`, plus the open-ended `80+`.  Keeping it an enum
//! (rather than a free-form label) makes the "same set of rows in both
//! tables" invariant a matter of sequence comparison instead of string
//! bookkeeping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One age band of the population partition.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-9")]
    Age0To9,
    #[serde(rename = "10-19")]
    Age10To19,
    #[serde(rename = "20-29")]
    Age20To29,
    #[serde(rename = "30-39")]
    Age30To39,
    #[serde(rename = "40-49")]
    Age40To49,
    #[serde(rename = "50-59")]
    Age50To59,
    #[serde(rename = "60-69")]
    Age60To69,
    #[serde(rename = "70-79")]
    Age70To79,
    #[serde(rename = "80+")]
    Age80Plus,
}

impl AgeGroup {
    /// All bands in canonical (ascending) order.
    pub const ALL: [AgeGroup; 9] = [
        AgeGroup::Age0To9,
        AgeGroup::Age10To19,
        AgeGroup::Age20To29,
        AgeGroup::Age30To39,
        AgeGroup::Age40To49,
        AgeGroup::Age50To59,
        AgeGroup::Age60To69,
        AgeGroup::Age70To79,
        AgeGroup::Age80Plus,
    ];

    /// The band's display label, e.g. `"10-19"` or `"80+"`.
    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Age0To9 => "0-9",
            AgeGroup::Age10To19 => "10-19",
            AgeGroup::Age20To29 => "20-29",
            AgeGroup::Age30To39 => "30-39",
            AgeGroup::Age40To49 => "40-49",
            AgeGroup::Age50To59 => "50-59",
            AgeGroup::Age60To69 => "60-69",
            AgeGroup::Age70To79 => "70-79",
            AgeGroup::Age80Plus => "80+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label does not name one of the nine bands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown age group label {0:?}")]
pub struct ParseAgeGroupError(pub String);

impl FromStr for AgeGroup {
    type Err = ParseAgeGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| ParseAgeGroupError(s.to_string()))
    }
}
