//! `ep-data` — bundled reference data and the session import slot.
//!
//! The two bundled datasets (scenarios, case counts) ship with the
//! application as JSON under `assets/`.  Each repository loads its dataset
//! once, schema-validates it against the shapes in [`shapes`], and is
//! read-only thereafter — an invalid bundled dataset is a packaging defect
//! and fails construction, not a condition to recover from at lookup time.
//!
//! # Crate layout
//!
//! | Module          | Contents                                            |
//! |-----------------|-----------------------------------------------------|
//! | [`scenarios`]   | `ScenarioRepository` — named scenarios, internalized on lookup |
//! | [`case_counts`] | `CaseCountsRepository` — per-region observation sequences |
//! | [`session`]     | `SessionStore` + the one imported-case-count slot    |
//! | [`shapes`]      | Expected shapes of the two bundled JSON documents   |
//! | [`error`]       | `RepositoryError`                                    |
//!
//! # Lookup stances
//!
//! The two repositories deliberately differ: an unknown case-count region
//! degrades to an empty sequence (plus a debug-build diagnostic), because
//! stale references to case data should not take the UI down; an unknown
//! scenario is an error, because there is no safe default scenario.

pub mod case_counts;
pub mod error;
pub mod scenarios;
pub mod session;
pub mod shapes;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use case_counts::{CaseCountsRepository, NONE_COUNTRY_NAME};
pub use error::RepositoryError;
pub use scenarios::ScenarioRepository;
pub use session::{
    load_user_case_counts, reset_user_case_counts, save_user_case_counts, MemorySessionStore,
    SessionStore, CUSTOM_CASE_COUNT_KEY,
};
