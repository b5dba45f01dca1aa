//! External ↔ internal identity mapping.
//!
//! [`to_internal`] and [`to_external`] are mutually inverse up to the
//! identity field: `to_external(&to_internal(x)) == x` for every well-formed
//! external scenario `x`.  Interval order is preserved in both directions.
//!
//! `to_internal` consumes an *external* value by construction, so it cannot
//! be applied to its own output; re-running a scenario through it (e.g. on
//! re-selection) therefore always mints fresh identities.

use crate::scenario::{
    IntervalId, MitigationData, MitigationDataExternal, MitigationInterval,
    MitigationIntervalExternal, ScenarioDatum, ScenarioDatumExternal,
};

/// Attach a freshly generated identity to one interval.
pub fn add_id(interval: MitigationIntervalExternal) -> MitigationInterval {
    MitigationInterval {
        id: IntervalId::random(),
        name: interval.name,
        time_range: interval.time_range,
        transmission_reduction: interval.transmission_reduction,
    }
}

/// Drop the identity from one interval, keeping every other field.
pub fn remove_id(interval: &MitigationInterval) -> MitigationIntervalExternal {
    MitigationIntervalExternal {
        name: interval.name.clone(),
        time_range: interval.time_range,
        transmission_reduction: interval.transmission_reduction,
    }
}

/// Convert an external scenario into the edit-session shape, minting one
/// identity per mitigation interval.
pub fn to_internal(scenario: ScenarioDatumExternal) -> ScenarioDatum {
    let ScenarioDatumExternal {
        population,
        epidemiological,
        simulation,
        mitigation,
    } = scenario;

    ScenarioDatum {
        population,
        epidemiological,
        simulation,
        mitigation: MitigationData {
            mitigation_intervals: mitigation.mitigation_intervals.into_iter().map(add_id).collect(),
        },
    }
}

/// Convert an edit-session scenario back to the serializable shape,
/// stripping every interval identity.
pub fn to_external(scenario: &ScenarioDatum) -> ScenarioDatumExternal {
    ScenarioDatumExternal {
        population: scenario.population.clone(),
        epidemiological: scenario.epidemiological.clone(),
        simulation: scenario.simulation.clone(),
        mitigation: MitigationDataExternal {
            mitigation_intervals: scenario
                .mitigation
                .mitigation_intervals
                .iter()
                .map(remove_id)
                .collect(),
        },
    }
}
