//! `ep-core` — foundational types for the `ep` scenario-configurator parameter
//! layer.
//!
//! This crate is a dependency of every other `ep-*` crate.  It intentionally
//! has no `ep-*` dependencies and minimal external ones (`chrono`, `serde`,
//! `thiserror`, `uuid`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`age`]       | `AgeGroup` — the nine age bands joining the tables       |
//! | [`time`]      | `DateRange`, lenient ISO date parsing                    |
//! | [`scenario`]  | External and internal scenario shapes, `IntervalId`      |
//! | [`mapper`]    | `to_internal` / `to_external` identity mapping           |
//! | [`casecount`] | `CaseCountsDatum` and the bundled-dataset containers     |
//! | [`severity`]  | Normalized severity and age-distribution rows            |
//! | [`error`]     | `EpError`, `EpResult`                                    |
//!
//! # External vs. internal shapes
//!
//! Everything that is serialized — bundled datasets, session blobs, exported
//! scenarios — uses the *external* shapes.  The *internal* shapes exist only
//! in memory for the duration of an edit session and differ in exactly one
//! way: mitigation intervals carry a synthetic [`scenario::IntervalId`].
//! Internal types implement neither `Serialize` nor `Deserialize`, so the
//! identity cannot leak into any serialized form.

pub mod age;
pub mod casecount;
pub mod error;
pub mod mapper;
pub mod scenario;
pub mod severity;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use age::AgeGroup;
pub use casecount::{CaseCountsArray, CaseCountsData, CaseCountsDatum};
pub use error::{EpError, EpResult};
pub use mapper::{add_id, remove_id, to_external, to_internal};
pub use scenario::{
    EpidemiologicalData, IntervalId, MitigationData, MitigationDataExternal, MitigationInterval,
    MitigationIntervalExternal, NumericRange, PopulationData, ScenarioArray, ScenarioData,
    ScenarioDatum, ScenarioDatumExternal, SimulationData,
};
pub use severity::{AgeDistributionDatum, SeverityDistributionDatum};
pub use time::DateRange;
