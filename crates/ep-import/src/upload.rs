//! Uploaded-file plumbing.

/// One file handed over by the upload surface: its name and its full
/// UTF-8 content.  The read has completed by the time this exists; the
/// importer never sees partial content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// MIME types and extensions accepted by the upload surface.  Covers the
/// vendor variants browsers and spreadsheet tools report for CSV/TSV.
pub const ALLOWED_FILE_TYPES: &[&str] = &[
    "text/plain",
    "text/csv",
    "application/csv",
    "text/x-csv",
    "application/vnd.ms-excel",
    "text/tab-separated-values",
    "text/tsv",
    "application/tsv",
    ".csv",
    ".tsv",
];

/// Whether a reported MIME type or extension is accepted for import.
pub fn is_allowed_upload(kind: &str) -> bool {
    ALLOWED_FILE_TYPES.contains(&kind.to_ascii_lowercase().as_str())
}
