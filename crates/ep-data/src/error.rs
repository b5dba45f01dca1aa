//! Repository construction errors.
//!
//! These are fatal configuration errors: they can only arise from a broken
//! bundled dataset (or a broken dataset passed in tests), never from user
//! input.  Callers building from bundled data let them terminate startup.

use thiserror::Error;

use ep_schema::SchemaValidationError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("bundled dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
