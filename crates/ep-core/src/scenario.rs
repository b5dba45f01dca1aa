//! Scenario parameter shapes.
//!
//! A scenario bundles population, epidemiological, simulation, and mitigation
//! parameters under a name.  Two parallel shapes exist:
//!
//! - **External** (`ScenarioDatumExternal`, `MitigationIntervalExternal`):
//!   what the bundled dataset and any exported/shared scenario look like.
//!   These derive serde with the dataset's `camelCase` field names.
//! - **Internal** (`ScenarioDatum`, `MitigationInterval`): the in-memory
//!   edit-session shape.  Identical except that every mitigation interval
//!   carries an [`IntervalId`], so list editors can track rows across
//!   reorder/edit operations.  Internal types derive no serde traits.
//!
//! Conversion between the two lives in [`crate::mapper`].

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::time::DateRange;

// ── Interval identity ─────────────────────────────────────────────────────────

/// Synthetic identity of one mitigation interval within an edit session.
///
/// Generated fresh whenever an interval is constructed from external data and
/// stable for as long as the internal value lives.  Deliberately implements
/// neither `Serialize` nor `Deserialize`: the identity exists only in memory.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct IntervalId(Uuid);

impl IntervalId {
    /// Generate a new unique identity.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for IntervalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Mitigation ────────────────────────────────────────────────────────────────

/// One intervention window as it appears in serialized scenarios.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationIntervalExternal {
    pub name: String,
    pub time_range: DateRange,
    /// Reduction of transmission while the interval is active, in percent.
    pub transmission_reduction: f64,
}

/// One intervention window in the edit-session representation.
#[derive(Clone, PartialEq, Debug)]
pub struct MitigationInterval {
    pub id: IntervalId,
    pub name: String,
    pub time_range: DateRange,
    pub transmission_reduction: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationDataExternal {
    /// Ordered: display and edit order is meaningful.
    pub mitigation_intervals: Vec<MitigationIntervalExternal>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct MitigationData {
    pub mitigation_intervals: Vec<MitigationInterval>,
}

// ── Shared component blocks ───────────────────────────────────────────────────
//
// These are identical in the external and internal shapes, so one definition
// serves both.

/// A bounded numeric parameter, e.g. the uncertainty range of R0.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct NumericRange {
    pub begin: f64,
    pub end:   f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationData {
    pub population: u64,
    pub initial_number_of_cases: u64,
    pub imports_per_day: f64,
    pub hospital_beds: u64,
    pub icu_beds: u64,
    /// Name of the case-count entry to plot alongside results.
    pub case_counts_name: String,
    /// Name of the age-distribution entry the population is spread over.
    pub age_distribution_name: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpidemiologicalData {
    pub r0: NumericRange,
    pub latency_days: f64,
    pub infectious_period_days: f64,
    pub seasonal_forcing: f64,
    /// Month of peak transmission, 0 = January.
    pub peak_month: u8,
    pub hospital_stay_days: f64,
    pub icu_stay_days: f64,
    pub overflow_severity: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationData {
    pub simulation_time_range: DateRange,
    pub number_stochastic_runs: u32,
}

// ── Scenario datum ────────────────────────────────────────────────────────────

/// The serializable scenario shape (no synthetic identities).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDatumExternal {
    pub population: PopulationData,
    pub epidemiological: EpidemiologicalData,
    pub simulation: SimulationData,
    pub mitigation: MitigationDataExternal,
}

/// The edit-session scenario shape.  Differs from
/// [`ScenarioDatumExternal`] only in the mitigation block's interval type.
#[derive(Clone, PartialEq, Debug)]
pub struct ScenarioDatum {
    pub population: PopulationData,
    pub epidemiological: EpidemiologicalData,
    pub simulation: SimulationData,
    pub mitigation: MitigationData,
}

// ── Bundled-dataset containers ────────────────────────────────────────────────

/// One named entry of the bundled scenario dataset.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScenarioData {
    pub name: String,
    pub data: ScenarioDatumExternal,
}

/// The bundled scenario dataset: an array of records in a named container
/// field.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScenarioArray {
    pub all: Vec<ScenarioData>,
}
