//! `ep-import` — user-supplied case-count files.
//!
//! Unlike the bundled dataset (validated once at startup, trusted
//! thereafter), imports arrive per user action and are arbitrary files.  The
//! importer parses one CSV/TSV file into the canonical
//! [`ep_core::CaseCountsDatum`] sequence, aborting on the first bad row: a
//! malformed file is assumed systemically broken rather than containing
//! isolated bad rows, so there is no partial import.
//!
//! # File format
//!
//! Comma- or tab-delimited UTF-8 text (the delimiter is sniffed from the
//! header line).  A header row is mandatory; `#`-prefixed lines are comments
//! and blank lines are skipped.
//!
//! ```csv
//! time,cases,deaths,icu,hospitalized
//! 2020-03-01,5,,,
//! # revised after reporting backlog
//! 2020-03-02,7,1,,2
//! ```
//!
//! Recognized columns: `time` (required per row), `cases`, `deaths`, `icu`,
//! `hospitalized` (each optional; an empty cell means "not observed").
//! Unknown columns are ignored.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`upload`] | `UploadedFile`, the accepted MIME/extension set       |
//! | [`parse`]  | The parser: `import_case_counts`, `parse_case_counts` |
//! | [`error`]  | `ImportError` with the user-facing messages           |

pub mod error;
pub mod parse;
pub mod upload;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::ImportError;
pub use parse::{import_case_counts, parse_case_counts, ImportedCaseCounts};
pub use upload::{is_allowed_upload, UploadedFile, ALLOWED_FILE_TYPES};
