//! Observed case-count records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One time-stamped observation.
///
/// Every count is optional: published datasets routinely carry partial
/// columns, and an absent count is distinct from a reported zero only until
/// filtering — [`CaseCountsDatum::is_empty`] treats both as "nothing
/// observed".
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseCountsDatum {
    pub time: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cases: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icu: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospitalized: Option<u64>,
}

impl CaseCountsDatum {
    /// A datum with no counts at all for `time`.
    pub fn at(time: NaiveDate) -> Self {
        Self {
            time,
            cases: None,
            deaths: None,
            icu: None,
            hospitalized: None,
        }
    }

    /// True when every count is absent or zero.  Empty datums are dropped
    /// before the sequence reaches the simulation engine.
    pub fn is_empty(&self) -> bool {
        ![self.cases, self.deaths, self.icu, self.hospitalized]
            .iter()
            .any(|c| matches!(c, Some(n) if *n > 0))
    }
}

/// One named region's observation sequence in the bundled dataset.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CaseCountsData {
    pub name: String,
    pub data: Vec<CaseCountsDatum>,
}

/// The bundled case-count dataset: an array of records in a named container
/// field.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CaseCountsArray {
    pub all: Vec<CaseCountsData>,
}
