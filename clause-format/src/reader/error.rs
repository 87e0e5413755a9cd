use std::io;

#[cfg(doc)]
use super::ClauseReader;

/// The errors that can be encountered by the [`ClauseReader`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read from source: {0}")]
    IoError(#[from] io::Error),
    #[error("line {line_nr} is not valid UTF-8")]
    InvalidUtf8 { line_nr: usize },
}
