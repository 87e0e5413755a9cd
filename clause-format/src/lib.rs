//! This crate contains abstractions for the textual clause format used by `plres`, and for the
//! derivation traces it produces.
//!
//! A clause file contains one clause per line. A clause is a disjunction of literals separated by
//! [`DISJUNCTION`], where a literal is an atom name optionally prefixed by [`NEGATION`].
//! Everything after a [`COMMENT`] marker is ignored, as are blank lines:
//! ```text
//! # modus ponens
//! ~rain|wet
//! rain
//! ~wet      # negated conjecture
//! ```
//!
//! To read clause files see [`reader::ClauseReader`], and to write derivation traces see
//! [`writer::TraceWriter`].

mod format;

pub mod reader;
pub mod trace;
pub mod writer;

pub use format::*;
