//! Import failure kinds.
//!
//! Every variant is recoverable user input: the caller surfaces the message
//! and the import attempt ends with app state untouched.  The `Display`
//! strings are the user-facing messages; there is no catch-all variant, so an
//! unknown error kind is unrepresentable.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The user pressed import with nothing selected.
    #[error("No file has been uploaded.")]
    NoFileUploaded,

    /// More than one file was selected.  Rejected before any parsing.
    #[error("Only one CSV or TSV file can be imported.")]
    MultipleFilesSelected,

    /// The file is not parseable tabular text, or holds no data rows.
    #[error("The file could not be loaded. Make sure that it's a valid CSV file.")]
    FileUnreadable,

    /// A row lacks its time field.  Aborts the whole import.
    #[error("The time field is missing.")]
    MissingTimeField,

    /// A cell holds a value that does not parse for its column.  Aborts the
    /// whole import; carries the offending value for the message.
    #[error("{0} is not a valid field value.")]
    InvalidFieldValue(String),
}
