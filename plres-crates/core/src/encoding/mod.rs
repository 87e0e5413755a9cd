//! Encodes propositional clauses as pairs of bitsets over an [`AtomTable`].
//!
//! Every atom is assigned a bit position in the order in which it is first encountered. A
//! [`Clause`] stores one bitset for the atoms occurring positively and one for the atoms occurring
//! negatively; equality, subsumption and tautology checks then reduce to bit operations. The
//! bitsets are arbitrary-precision, so there is no bound on the number of atoms.
mod atom_table;
mod clause;
mod clause_set;
mod encoder;
mod error;

pub use atom_table::AtomTable;
pub use clause::Clause;
pub use clause_set::ClauseSet;
pub use encoder::ClauseEncoder;
pub use error::EncodingError;
