//! The bundled scenario repository.

use std::sync::OnceLock;

use serde_json::Value;

use ep_core::{to_internal, EpError, EpResult, ScenarioArray, ScenarioData, ScenarioDatum};

use crate::error::RepositoryResult;
use crate::shapes;

static BUNDLED_SCENARIOS: &str = include_str!("../assets/scenarios.json");

/// Validated, read-only scenario dataset.
///
/// Stores the *external* shapes; [`ScenarioRepository::get`] internalizes on
/// the way out, so every lookup mints fresh interval identities.
#[derive(Debug)]
pub struct ScenarioRepository {
    scenarios: Vec<ScenarioData>,
}

impl ScenarioRepository {
    /// Load and validate the bundled dataset.
    ///
    /// A failure here is a packaging defect; callers at startup let it
    /// propagate and terminate.
    pub fn from_bundled() -> RepositoryResult<Self> {
        Self::from_json(BUNDLED_SCENARIOS)
    }

    /// Load and validate a dataset from JSON text (the bundled document's
    /// format: an `all` container of named records).
    pub fn from_json(text: &str) -> RepositoryResult<Self> {
        let raw: Value = serde_json::from_str(text)?;
        shapes::scenario_array().validate(&raw)?;
        let parsed: ScenarioArray = serde_json::from_value(raw)?;
        tracing::debug!(scenarios = parsed.all.len(), "scenario dataset loaded");
        Ok(Self { scenarios: parsed.all })
    }

    /// The process-wide repository over the bundled dataset.
    ///
    /// # Panics
    /// Panics on first access if the bundled dataset fails validation — a
    /// fatal configuration error, intentionally not recoverable.
    pub fn bundled() -> &'static ScenarioRepository {
        static REPO: OnceLock<ScenarioRepository> = OnceLock::new();
        REPO.get_or_init(|| {
            ScenarioRepository::from_bundled()
                .expect("bundled scenario dataset failed schema validation")
        })
    }

    /// Scenario names in dataset order.
    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    /// Look up a scenario by name, already converted to the edit-session
    /// shape.  Unknown names are an error — a missing scenario has no safe
    /// default.
    pub fn get(&self, name: &str) -> EpResult<ScenarioDatum> {
        self.scenarios
            .iter()
            .find(|s| s.name == name)
            .map(|s| to_internal(s.data.clone()))
            .ok_or_else(|| EpError::ScenarioNotFound(name.to_string()))
    }
}
