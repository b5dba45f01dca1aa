//! The import parser.

use serde::{Deserialize, Serialize};

use ep_core::casecount::CaseCountsDatum;
use ep_core::time::parse_date;

use crate::error::ImportError;
use crate::upload::UploadedFile;

/// A successful import: the uploaded file's name paired with the canonical
/// datum sequence.  This is also the session-blob shape — persisting or
/// discarding it is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedCaseCounts {
    pub file_name: String,
    pub data: Vec<CaseCountsDatum>,
}

/// Import from an upload selection.
///
/// Exactly one file may be imported at a time; an empty or multi-file
/// selection is rejected before any parsing begins.
pub fn import_case_counts(files: &[UploadedFile]) -> Result<ImportedCaseCounts, ImportError> {
    match files {
        [] => Err(ImportError::NoFileUploaded),
        [file] => parse_case_counts(&file.name, &file.content),
        _ => Err(ImportError::MultipleFilesSelected),
    }
}

/// Parse one CSV/TSV file into a case-count sequence.
///
/// The first row-level violation aborts the whole import — no partial
/// sequence is ever produced.
pub fn parse_case_counts(file_name: &str, text: &str) -> Result<ImportedCaseCounts, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(text))
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(_) => return Err(ImportError::FileUnreadable),
    };
    let columns = Columns::from_headers(&headers);

    let mut data = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|_| ImportError::FileUnreadable)?;
        data.push(columns.datum_from_record(&record)?);
    }

    if data.is_empty() {
        // A header alone (or nothing at all) is not an importable file.
        return Err(ImportError::FileUnreadable);
    }

    Ok(ImportedCaseCounts {
        file_name: file_name.to_string(),
        data,
    })
}

/// Tab wins if the header line contains one; comma otherwise.  Decided from
/// the first line that is neither blank nor a comment.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text
        .lines()
        .find(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'));
    match header {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    }
}

// ── Column mapping ────────────────────────────────────────────────────────────

/// Indices of the recognized columns within the header row.  Unknown columns
/// are ignored.
struct Columns {
    time: Option<usize>,
    cases: Option<usize>,
    deaths: Option<usize>,
    icu: Option<usize>,
    hospitalized: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Self {
            time: find("time"),
            cases: find("cases"),
            deaths: find("deaths"),
            icu: find("icu"),
            hospitalized: find("hospitalized"),
        }
    }

    fn datum_from_record(&self, record: &csv::StringRecord) -> Result<CaseCountsDatum, ImportError> {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let time_text = cell(self.time).ok_or(ImportError::MissingTimeField)?;
        let time = parse_date(time_text)
            .ok_or_else(|| ImportError::InvalidFieldValue(time_text.to_string()))?;

        Ok(CaseCountsDatum {
            time,
            cases: parse_count(cell(self.cases))?,
            deaths: parse_count(cell(self.deaths))?,
            icu: parse_count(cell(self.icu))?,
            hospitalized: parse_count(cell(self.hospitalized))?,
        })
    }
}

/// An absent or empty cell is "not observed"; anything present must be a
/// non-negative whole number.
fn parse_count(cell: Option<&str>) -> Result<Option<u64>, ImportError> {
    let Some(text) = cell else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= 0.0 => Ok(Some(n as u64)),
        _ => Err(ImportError::InvalidFieldValue(text.to_string())),
    }
}
