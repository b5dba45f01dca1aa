//! The bundled case-count repository.

use std::sync::OnceLock;

use serde_json::Value;

use ep_core::{CaseCountsArray, CaseCountsData, CaseCountsDatum};

use crate::error::RepositoryResult;
use crate::shapes;

static BUNDLED_CASE_COUNTS: &str = include_str!("../assets/case_counts.json");

/// Sentinel region name meaning "plot no case data".  Lookups of this name
/// return an empty sequence without any diagnostic.
pub const NONE_COUNTRY_NAME: &str = "None";

/// Validated, read-only case-count dataset.
#[derive(Debug)]
pub struct CaseCountsRepository {
    all: Vec<CaseCountsData>,
}

impl CaseCountsRepository {
    /// Load and validate the bundled dataset.  Failure is a packaging
    /// defect; callers at startup let it propagate and terminate.
    pub fn from_bundled() -> RepositoryResult<Self> {
        Self::from_json(BUNDLED_CASE_COUNTS)
    }

    /// Load and validate a dataset from JSON text.
    pub fn from_json(text: &str) -> RepositoryResult<Self> {
        let raw: Value = serde_json::from_str(text)?;
        shapes::case_counts_array().validate(&raw)?;
        let parsed: CaseCountsArray = serde_json::from_value(raw)?;
        tracing::debug!(regions = parsed.all.len(), "case-count dataset loaded");
        Ok(Self { all: parsed.all })
    }

    /// The process-wide repository over the bundled dataset.
    ///
    /// # Panics
    /// Panics on first access if the bundled dataset fails validation.
    pub fn bundled() -> &'static CaseCountsRepository {
        static REPO: OnceLock<CaseCountsRepository> = OnceLock::new();
        REPO.get_or_init(|| {
            CaseCountsRepository::from_bundled()
                .expect("bundled case-count dataset failed schema validation")
        })
    }

    /// Region names in dataset order.
    pub fn names(&self) -> Vec<&str> {
        self.all.iter().map(|cc| cc.name.as_str()).collect()
    }

    /// A region's raw observation sequence.
    ///
    /// The sentinel [`NONE_COUNTRY_NAME`] yields an empty sequence.  An
    /// unknown name also yields an empty sequence rather than failing — a
    /// stale reference to case data must not take the UI down — but emits a
    /// developer-facing warning in debug builds.
    pub fn case_counts(&self, name: &str) -> Vec<CaseCountsDatum> {
        if name == NONE_COUNTRY_NAME {
            return Vec::new();
        }

        match self.all.iter().find(|cc| cc.name == name) {
            Some(found) => found.data.clone(),
            None => {
                if cfg!(debug_assertions) {
                    tracing::warn!(
                        region = name,
                        "requested case counts for an entry that is not present in the data; \
                         this probably means an incorrect reference to non-existing case counts. \
                         Returning an empty sequence"
                    );
                }
                Vec::new()
            }
        }
    }

    /// A region's sequence with empty datums dropped, ascending by time.
    ///
    /// The sort is stable, so datums sharing a timestamp keep their original
    /// relative order.
    pub fn sorted_non_empty(&self, name: &str) -> Vec<CaseCountsDatum> {
        let mut data: Vec<CaseCountsDatum> = self
            .case_counts(name)
            .into_iter()
            .filter(|d| !d.is_empty())
            .collect();
        data.sort_by(|a, b| a.time.cmp(&b.time));
        data
    }
}
