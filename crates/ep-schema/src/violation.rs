//! Violation records and the aggregate error.

use std::fmt;

/// What went wrong at one location.
#[derive(Clone, Debug, PartialEq)]
pub enum ViolationKind {
    /// A required object field is absent.
    MissingField,
    /// The value is not of the expected type (includes unparseable dates).
    InvalidType { expected: &'static str },
    /// The value is of the right type but outside its allowed range.
    OutOfRange { constraint: String },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingField => write!(f, "missing required field"),
            ViolationKind::InvalidType { expected } => write!(f, "expected {expected}"),
            ViolationKind::OutOfRange { constraint } => write!(f, "out of range: {constraint}"),
        }
    }
}

/// One shape violation, located by a JSON-path-style string such as
/// `$.all[3].data[0].time`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaViolation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// The aggregate outcome of a failed check: every violation found, never just
/// the first.
#[derive(Debug)]
pub struct SchemaValidationError(pub Vec<SchemaViolation>);

impl std::error::Error for SchemaValidationError {}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema validation failed ({} violation(s)): ", self.0.len())?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
