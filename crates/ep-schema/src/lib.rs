//! `ep-schema` — shape validation for untrusted structured input.
//!
//! Bundled datasets and user uploads arrive as parsed JSON of unknown shape.
//! Before anything is decoded into typed records, it is checked against a
//! declarative [`Shape`] tree.  The checker walks the *entire* value and
//! accumulates every violation it finds, so a caller can render one complete
//! error report instead of fixing problems one at a time.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`shape`]     | `Shape`, `Field` — the expected-shape tree            |
//! | [`check`]     | The walker producing `Vec<SchemaViolation>`           |
//! | [`violation`] | `SchemaViolation`, `ViolationKind`, the error wrapper |
//!
//! # Typical use
//!
//! ```no_run
//! use ep_schema::{Field, Shape};
//!
//! let shape = Shape::object(vec![
//!     Field::required("name", Shape::String),
//!     Field::optional("cases", Shape::non_negative_integer()),
//! ]);
//! let value: serde_json::Value = serde_json::from_str("{\"name\": \"x\"}").unwrap();
//! shape.validate(&value).unwrap();
//! ```
//!
//! Validation is pure: no I/O, no side effects.  Decoding a checked value
//! into typed records is the caller's job (`serde_json::from_value` after a
//! successful `validate`).

pub mod check;
pub mod shape;
pub mod violation;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use shape::{Field, Shape};
pub use violation::{SchemaValidationError, SchemaViolation, ViolationKind};
