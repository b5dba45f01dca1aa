//! `ep-params` — cross-table validation of age-group parameters.
//!
//! The severity table and the age-distribution table are edited
//! independently but must stay consistent: same age bands, same order, and
//! every cell within its numeric rules.  This crate validates the two tables
//! *together*, accumulating one error per violated (age group, column) rule
//! so the user sees the whole picture in a single pass.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`cell`]     | `CellValue` — a form cell before validation             |
//! | [`row`]      | `SeverityRowInput`, `AgeDistributionRowInput`           |
//! | [`validate`] | The table validator and the validity predicate          |
//! | [`error`]    | `CellError`, `AgeGroupParameterError`, `AgeGroupMismatch` |
//!
//! # Rule order
//!
//! Rules fire per field in a fixed order and only the first applicable one is
//! reported — a missing cell is "Required", not also "not a number".
//! Callers must always pass the *current* versions of both tables; validating
//! a fresh severity table against a stale age distribution defeats the
//! cross-table checks.

pub mod cell;
pub mod error;
pub mod row;
pub mod validate;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellValue;
pub use error::{AgeGroupMismatch, AgeGroupParameterError, CellError, Column};
pub use row::{AgeDistributionRowInput, SeverityRowInput};
pub use validate::{are_age_group_parameters_valid, validate_age_group_parameters, AgeGroupValidation};
