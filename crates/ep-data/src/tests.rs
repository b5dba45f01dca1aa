//! Unit tests for ep-data.

use chrono::NaiveDate;

use ep_core::{CaseCountsDatum, EpError};
use ep_import::ImportedCaseCounts;

use crate::case_counts::{CaseCountsRepository, NONE_COUNTRY_NAME};
use crate::scenarios::ScenarioRepository;
use crate::session::{
    load_user_case_counts, reset_user_case_counts, save_user_case_counts, MemorySessionStore,
    SessionStore, CUSTOM_CASE_COUNT_KEY,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, d).unwrap()
}

/// A small dataset exercising the filter and the sort tie-break.
const CASE_COUNTS_FIXTURE: &str = r#"{
  "all": [
    {
      "name": "Testland",
      "data": [
        { "time": "2020-03-03", "cases": 0, "deaths": 0 },
        { "time": "2020-03-01", "cases": 5 },
        { "time": "2020-03-02", "deaths": 1 },
        { "time": "2020-03-02", "icu": 2 }
      ]
    },
    { "name": "Emptyland", "data": [] }
  ]
}"#;

// ── Scenario repository ───────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_repository {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_validates() {
        let repo = ScenarioRepository::from_bundled().unwrap();
        assert_eq!(
            repo.names(),
            vec!["Switzerland", "Germany", "United States of America"]
        );
    }

    #[test]
    fn lookup_returns_the_internal_shape() {
        let repo = ScenarioRepository::from_bundled().unwrap();
        let scenario = repo.get("Switzerland").unwrap();
        assert_eq!(scenario.population.case_counts_name, "Switzerland");
        assert_eq!(scenario.mitigation.mitigation_intervals.len(), 2);
    }

    #[test]
    fn each_lookup_mints_fresh_interval_identities() {
        let repo = ScenarioRepository::from_bundled().unwrap();
        let first = repo.get("Switzerland").unwrap();
        let second = repo.get("Switzerland").unwrap();
        assert_ne!(
            first.mitigation.mitigation_intervals[0].id,
            second.mitigation.mitigation_intervals[0].id,
        );
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let repo = ScenarioRepository::from_bundled().unwrap();
        match repo.get("Atlantis") {
            Err(EpError::ScenarioNotFound(name)) => assert_eq!(name, "Atlantis"),
            other => panic!("expected ScenarioNotFound, got {other:?}"),
        }
    }

    #[test]
    fn invalid_dataset_fails_construction_with_every_violation() {
        let broken = r#"{
          "all": [
            { "name": "A" },
            { "name": 7, "data": [] }
          ]
        }"#;
        let err = ScenarioRepository::from_json(broken).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("$.all[0].data"));
        assert!(message.contains("$.all[1].name"));
    }

    #[test]
    fn non_json_dataset_fails_construction() {
        assert!(ScenarioRepository::from_json("not json").is_err());
    }
}

// ── Case-count repository ─────────────────────────────────────────────────────

#[cfg(test)]
mod case_count_repository {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_validates() {
        let repo = CaseCountsRepository::from_bundled().unwrap();
        assert_eq!(
            repo.names(),
            vec!["Switzerland", "Germany", "United States of America"]
        );
    }

    #[test]
    fn lookup_returns_the_raw_sequence_in_dataset_order() {
        let repo = CaseCountsRepository::from_json(CASE_COUNTS_FIXTURE).unwrap();
        let data = repo.case_counts("Testland");
        assert_eq!(data.len(), 4);
        assert_eq!(data[0].time, day(3));
    }

    #[test]
    fn sentinel_name_returns_empty() {
        let repo = CaseCountsRepository::from_json(CASE_COUNTS_FIXTURE).unwrap();
        assert!(repo.case_counts(NONE_COUNTRY_NAME).is_empty());
    }

    #[test]
    fn unknown_name_returns_empty_without_failing() {
        let repo = CaseCountsRepository::from_json(CASE_COUNTS_FIXTURE).unwrap();
        assert!(repo.case_counts("Atlantis").is_empty());
        assert!(repo.sorted_non_empty("Atlantis").is_empty());
    }

    #[test]
    fn sorted_non_empty_filters_and_sorts_with_stable_ties() {
        // T3 has only zero counts (dropped); T1 sorts before the two T2
        // datums, which keep their original relative order.
        let repo = CaseCountsRepository::from_json(CASE_COUNTS_FIXTURE).unwrap();
        let data = repo.sorted_non_empty("Testland");

        assert_eq!(data.len(), 3);
        assert_eq!(data[0].time, day(1));
        assert_eq!(data[0].cases, Some(5));
        assert_eq!(data[1].time, day(2));
        assert_eq!(data[1].deaths, Some(1));
        assert_eq!(data[2].time, day(2));
        assert_eq!(data[2].icu, Some(2));
    }

    #[test]
    fn region_with_no_datums_yields_empty() {
        let repo = CaseCountsRepository::from_json(CASE_COUNTS_FIXTURE).unwrap();
        assert!(repo.case_counts("Emptyland").is_empty());
        assert!(repo.sorted_non_empty("Emptyland").is_empty());
    }

    #[test]
    fn invalid_dataset_fails_construction() {
        let broken = r#"{ "all": [ { "name": "X", "data": [ { "cases": 3 } ] } ] }"#;
        let err = CaseCountsRepository::from_json(broken).unwrap_err();
        assert!(err.to_string().contains("$.all[0].data[0].time"));
    }
}

// ── Session store ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use super::*;

    fn imported() -> ImportedCaseCounts {
        ImportedCaseCounts {
            file_name: "cases.csv".to_string(),
            data: vec![CaseCountsDatum {
                cases: Some(5),
                ..CaseCountsDatum::at(day(1))
            }],
        }
    }

    #[test]
    fn empty_store_has_no_import() {
        let store = MemorySessionStore::new();
        assert!(load_user_case_counts(&store).is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemorySessionStore::new();
        save_user_case_counts(&mut store, &imported());
        assert_eq!(load_user_case_counts(&store), Some(imported()));
    }

    #[test]
    fn save_overwrites_the_previous_import() {
        let mut store = MemorySessionStore::new();
        save_user_case_counts(&mut store, &imported());

        let replacement = ImportedCaseCounts {
            file_name: "newer.csv".to_string(),
            data: vec![],
        };
        save_user_case_counts(&mut store, &replacement);
        assert_eq!(load_user_case_counts(&store), Some(replacement));
    }

    #[test]
    fn reset_clears_the_slot() {
        let mut store = MemorySessionStore::new();
        save_user_case_counts(&mut store, &imported());
        reset_user_case_counts(&mut store);
        assert!(load_user_case_counts(&store).is_none());
    }

    #[test]
    fn corrupt_blob_reads_as_absent() {
        let mut store = MemorySessionStore::new();
        store.set(CUSTOM_CASE_COUNT_KEY, "{not json".to_string());
        assert!(load_user_case_counts(&store).is_none());
    }

    #[test]
    fn blob_is_stored_under_the_fixed_key() {
        let mut store = MemorySessionStore::new();
        save_user_case_counts(&mut store, &imported());
        assert!(store.get(CUSTOM_CASE_COUNT_KEY).is_some());
        assert!(store.get("somethingElse").is_none());
    }
}
