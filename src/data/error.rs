//! Data loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the data directory. All of them abort the run.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Malformed data file `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("Publication id `{0}` is not a safe directory name")]
    InvalidId(String),

    #[error("Publication id `{0}` is used more than once")]
    DuplicateId(String),
}
