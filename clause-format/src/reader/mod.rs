//! Implements the reading of clause files.
//!
//! See [`ClauseReader`] for information on how to read a clause file.

mod error;

use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;

pub use error::Error;

use crate::COMMENT;
use crate::DISJUNCTION;

/// A single clause as it appears in the source, split into its literal tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClauseLine {
    /// The 1-based line number in the source.
    pub line_nr: usize,
    /// The contents of the line after the comment and surrounding whitespace are stripped.
    pub text: String,
    /// The literal tokens, trimmed. Tokens are not validated, so they may be empty.
    pub literals: Vec<String>,
}

/// Used to read clause files.
///
/// The reader will read the source line-by-line. Comments are stripped, after which the remaining
/// contents are trimmed; lines which end up empty are skipped. The literals are not interpreted,
/// that is left to the consumer of the [`ClauseLine`]s.
///
/// # Example
/// ```
/// use clause_format::reader::ClauseReader;
///
/// let source = r#"
/// ## the axioms
/// a | ~b
///
/// b   # a unit
/// "#;
///
/// let mut reader = ClauseReader::new(source.as_bytes());
///
/// let first = reader.next_clause().unwrap().expect("a clause on line 3");
/// assert_eq!(3, first.line_nr);
/// assert_eq!(vec!["a", "~b"], first.literals);
///
/// let second = reader.next_clause().unwrap().expect("a clause on line 5");
/// assert_eq!("b", second.text);
///
/// assert_eq!(None, reader.next_clause().unwrap());
/// ```
#[derive(Debug)]
pub struct ClauseReader<R> {
    source: BufReader<R>,
    byte_buffer: Vec<u8>,
    line_nr: usize,
}

impl<R: Read> ClauseReader<R> {
    /// Construct a new clause reader which reads from `source`.
    pub fn new(source: R) -> ClauseReader<R> {
        ClauseReader {
            source: BufReader::new(source),
            byte_buffer: Vec::new(),
            line_nr: 0,
        }
    }

    /// Read the next clause in the source.
    ///
    /// Returns `Some(line)` with the next non-blank line, or `None` if the end of the source is
    /// reached.
    ///
    /// A line which is not valid UTF-8 results in [`Error::InvalidUtf8`]. That line has been
    /// consumed, so the caller may skip it and keep reading. Any other `Err` is an IO failure.
    pub fn next_clause(&mut self) -> Result<Option<ClauseLine>, Error> {
        loop {
            self.byte_buffer.clear();

            let read_bytes = self.source.read_until(b'\n', &mut self.byte_buffer)?;
            if read_bytes == 0 {
                // The end of the source has been reached.
                return Ok(None);
            }

            self.line_nr += 1;

            let Ok(line) = std::str::from_utf8(&self.byte_buffer) else {
                return Err(Error::InvalidUtf8 {
                    line_nr: self.line_nr,
                });
            };

            let content = strip_comment(line).trim();
            if content.is_empty() {
                continue;
            }

            return Ok(Some(ClauseLine {
                line_nr: self.line_nr,
                text: content.to_owned(),
                literals: split_literals(content),
            }));
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT) {
        Some(start) => &line[..start],
        None => line,
    }
}

fn split_literals(content: &str) -> Vec<String> {
    content
        .split(DISJUNCTION)
        .map(|literal| literal.trim().to_owned())
        .collect()
}
