//! The cross-table validator.

use ep_core::{AgeDistributionDatum, AgeGroup, SeverityDistributionDatum};

use crate::cell::CellValue;
use crate::error::{AgeGroupMismatch, AgeGroupParameterError, CellError, Column};
use crate::row::{AgeDistributionRowInput, SeverityRowInput};

/// Combined outcome of validating both tables.
///
/// `severity` and `age_distribution` hold the normalized values of the rows
/// whose every cell passed; rows with at least one bad cell are excluded.
#[derive(Clone, Debug, PartialEq)]
pub struct AgeGroupValidation {
    pub severity: Vec<SeverityDistributionDatum>,
    pub age_distribution: Vec<AgeDistributionDatum>,
    pub errors: Vec<AgeGroupParameterError>,
    pub mismatch: Option<AgeGroupMismatch>,
}

impl AgeGroupValidation {
    /// True iff every cell of both tables passed and the age bands align.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.mismatch.is_none()
    }
}

/// Validate the severity table against the age-distribution table.
///
/// Rules run independently per row and per field — no short-circuiting — so
/// the returned error list covers every offending cell.  The band-alignment
/// check is separate from the per-cell errors.
pub fn validate_age_group_parameters(
    severity: &[SeverityRowInput],
    age_distribution: &[AgeDistributionRowInput],
) -> AgeGroupValidation {
    let mut errors = Vec::new();

    let mismatch = check_band_alignment(severity, age_distribution);

    let mut severity_out = Vec::with_capacity(severity.len());
    for row in severity {
        let cells = [
            (Column::Confirmed, &row.confirmed),
            (Column::Severe, &row.severe),
            (Column::Critical, &row.critical),
            (Column::Fatal, &row.fatal),
            (Column::Isolated, &row.isolated),
        ];

        let mut values = [0.0; 5];
        let mut row_ok = true;
        for (slot, (column, cell)) in values.iter_mut().zip(cells) {
            match check_percentage(cell) {
                Ok(value) => *slot = value,
                Err(error) => {
                    row_ok = false;
                    errors.push(AgeGroupParameterError { age_group: row.age_group, column, error });
                }
            }
        }

        if row_ok {
            let [confirmed, severe, critical, fatal, isolated] = values;
            severity_out.push(SeverityDistributionDatum {
                age_group: row.age_group,
                confirmed,
                severe,
                critical,
                fatal,
                isolated,
            });
        }
    }

    let mut age_distribution_out = Vec::with_capacity(age_distribution.len());
    for row in age_distribution {
        match check_population(&row.population) {
            Ok(population) => age_distribution_out.push(AgeDistributionDatum {
                age_group: row.age_group,
                population,
            }),
            Err(error) => errors.push(AgeGroupParameterError {
                age_group: row.age_group,
                column: Column::Population,
                error,
            }),
        }
    }

    AgeGroupValidation {
        severity: severity_out,
        age_distribution: age_distribution_out,
        errors,
        mismatch,
    }
}

/// Shorthand for callers that only need the overall verdict.
pub fn are_age_group_parameters_valid(
    severity: &[SeverityRowInput],
    age_distribution: &[AgeDistributionRowInput],
) -> bool {
    validate_age_group_parameters(severity, age_distribution).is_valid()
}

// ── Per-field rules ───────────────────────────────────────────────────────────
//
// Ordered; the first failing rule wins and suppresses the rest for that cell.

fn check_percentage(cell: &CellValue) -> Result<f64, CellError> {
    if cell.is_missing() {
        return Err(CellError::Required);
    }
    let n = match cell.as_number() {
        Some(n) if n.is_finite() => n,
        _ => return Err(CellError::PercentageNotANumber),
    };
    if n < 0.0 {
        return Err(CellError::PercentageNegative);
    }
    if n > 100.0 {
        return Err(CellError::PercentageAbove100);
    }
    Ok(n)
}

fn check_population(cell: &CellValue) -> Result<u64, CellError> {
    if cell.is_missing() {
        return Err(CellError::Required);
    }
    let n = match cell.as_number() {
        Some(n) if n.is_finite() && n.fract() == 0.0 => n,
        _ => return Err(CellError::NotAnInteger),
    };
    if n < 0.0 {
        return Err(CellError::NegativeValue);
    }
    Ok(n as u64)
}

// ── Band alignment ────────────────────────────────────────────────────────────

fn check_band_alignment(
    severity: &[SeverityRowInput],
    age_distribution: &[AgeDistributionRowInput],
) -> Option<AgeGroupMismatch> {
    let severity_bands: Vec<AgeGroup> = severity.iter().map(|r| r.age_group).collect();
    let age_distribution_bands: Vec<AgeGroup> =
        age_distribution.iter().map(|r| r.age_group).collect();

    // Exact sequence equality: same set *and* same order.
    if severity_bands == age_distribution_bands {
        None
    } else {
        Some(AgeGroupMismatch {
            severity: severity_bands,
            age_distribution: age_distribution_bands,
        })
    }
}
