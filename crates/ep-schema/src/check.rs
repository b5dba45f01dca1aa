//! The shape walker.
//!
//! Checking never short-circuits: a mistyped field does not hide a missing
//! one three records later.  Paths use JSON-path notation rooted at `$`.

use serde_json::Value;

use ep_core::time::parse_date;

use crate::shape::{Field, Shape};
use crate::violation::{SchemaValidationError, SchemaViolation, ViolationKind};

impl Shape {
    /// Check `value` against this shape, returning every violation found.
    /// An empty vector means the value conforms.
    pub fn check(&self, value: &Value) -> Vec<SchemaViolation> {
        let mut out = Vec::new();
        self.check_at("$", value, &mut out);
        out
    }

    /// Like [`Shape::check`], but wraps a non-empty violation list into an
    /// error for `?` propagation.
    pub fn validate(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let violations = self.check(value);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError(violations))
        }
    }

    fn check_at(&self, path: &str, value: &Value, out: &mut Vec<SchemaViolation>) {
        match self {
            Shape::String => {
                if !value.is_string() {
                    push_type(out, path, "a string");
                }
            }

            Shape::Date => match value.as_str() {
                None => push_type(out, path, "a date string"),
                Some(s) if parse_date(s).is_none() => push_type(out, path, "a date string"),
                Some(_) => {}
            },

            Shape::Number { min, max } => match value.as_f64() {
                None => push_type(out, path, "a number"),
                Some(n) => {
                    if let Some(min) = *min {
                        if n < min {
                            push_range(out, path, format!("must be >= {min}, got {n}"));
                        }
                    }
                    if let Some(max) = *max {
                        if n > max {
                            push_range(out, path, format!("must be <= {max}, got {n}"));
                        }
                    }
                }
            },

            Shape::Integer { min, max } => match value.as_i64() {
                None => push_type(out, path, "an integer"),
                Some(n) => {
                    if let Some(min) = *min {
                        if n < min {
                            push_range(out, path, format!("must be >= {min}, got {n}"));
                        }
                    }
                    if let Some(max) = *max {
                        if n > max {
                            push_range(out, path, format!("must be <= {max}, got {n}"));
                        }
                    }
                }
            },

            Shape::Array(inner) => match value.as_array() {
                None => push_type(out, path, "an array"),
                Some(items) => {
                    for (i, item) in items.iter().enumerate() {
                        inner.check_at(&format!("{path}[{i}]"), item, out);
                    }
                }
            },

            Shape::Object(fields) => match value.as_object() {
                None => push_type(out, path, "an object"),
                Some(map) => {
                    for Field { name, shape, required } in fields {
                        match map.get(*name) {
                            Some(field_value) => {
                                shape.check_at(&format!("{path}.{name}"), field_value, out);
                            }
                            None if *required => out.push(SchemaViolation {
                                path: format!("{path}.{name}"),
                                kind: ViolationKind::MissingField,
                            }),
                            None => {}
                        }
                    }
                }
            },
        }
    }
}

fn push_type(out: &mut Vec<SchemaViolation>, path: &str, expected: &'static str) {
    out.push(SchemaViolation {
        path: path.to_string(),
        kind: ViolationKind::InvalidType { expected },
    });
}

fn push_range(out: &mut Vec<SchemaViolation>, path: &str, constraint: String) {
    out.push(SchemaViolation {
        path: path.to_string(),
        kind: ViolationKind::OutOfRange { constraint },
    });
}
