use std::path::Path;

use plres_core::input::InputError;
use thiserror::Error;

pub(crate) type PlresResult<T> = Result<T, PlresError>;

#[derive(Error, Debug)]
pub(crate) enum PlresError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Could not open {path}, more details: {source}")]
    CannotOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to read the clauses, more details: {0}")]
    InvalidInput(#[from] InputError),
}

impl PlresError {
    pub(crate) fn cannot_open(path: &Path, source: std::io::Error) -> Self {
        Self::CannotOpen {
            path: path.display().to_string(),
            source,
        }
    }
}
