//! Implements the writing of derivation traces.
//!
//! See [`TraceWriter`] for more information on how to write traces.

use std::io::BufWriter;
use std::io::Write;

use crate::trace::Conclusion;
use crate::trace::TraceStep;

/// Abstraction for writing derivation traces.
///
/// # Example
/// ```
/// # use std::num::NonZeroUsize;
/// # use clause_format::trace::*;
/// # use clause_format::writer::TraceWriter;
/// let index = |i: usize| NonZeroUsize::new(i).unwrap();
///
/// let mut output: Vec<u8> = Vec::new();
/// let mut writer = TraceWriter::new(&mut output);
///
/// writer
///     .write_step(&TraceStep {
///         index: index(1),
///         literals: vec!["a".to_owned()],
///         origin: TraceOrigin::Axiom,
///         masked_by: vec![],
///     })
///     .unwrap();
/// writer.write_conclusion(Conclusion::Saturated).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// let expected = "
/// [  1] : (a); axiom
/// s SATURATED
/// ";
/// assert_eq!(std::str::from_utf8(&output).unwrap(), expected.trim_start());
/// ```
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    /// The writer to the underlying sink.
    writer: BufWriter<W>,
}

impl<W: Write> TraceWriter<W> {
    /// Create a new trace writer which writes to an underlying sink implementing [`Write`].
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write a single step of the trace on its own line.
    ///
    /// This function wraps an IO operation, which is why it can fail with an IO error.
    pub fn write_step(&mut self, step: &TraceStep) -> std::io::Result<()> {
        writeln!(self.writer, "{step}")
    }

    /// Write the line closing the trace.
    ///
    /// This function wraps an IO operation, which is why it can fail with an IO error.
    pub fn write_conclusion(&mut self, conclusion: Conclusion) -> std::io::Result<()> {
        writeln!(self.writer, "s {conclusion}")
    }

    /// Flush the buffered output to the underlying sink.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
