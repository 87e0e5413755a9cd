//! # plres
//! A propositional resolution prover.
//!
//! Clauses over named atoms are encoded as pairs of bitsets by a
//! [`ClauseEncoder`](encoding::ClauseEncoder). The [`ResolutionEngine`](engine::ResolutionEngine)
//! saturates the union of the axioms and the negated conjecture by breadth-first binary
//! resolution, pruning redundant clauses with forward and backward subsumption, until it derives
//! the empty clause or no new clause can be derived. The resulting
//! [`ProofState`](engine::ProofState) records how every clause was obtained and can be rendered
//! as a derivation trace.
//!
//! # Example
//! ```
//! # use plres_core::encoding::ClauseEncoder;
//! # use plres_core::engine::ResolutionEngine;
//! # use plres_core::engine::SaturationOptions;
//! # use plres_core::engine::SaturationOutcome;
//! # use plres_core::input::parse_clauses;
//! # use plres_core::termination::Indefinite;
//! let mut encoder = ClauseEncoder::default();
//! let axioms = parse_clauses("a | b\n~a | b\n".as_bytes(), &mut encoder).unwrap();
//! let conjecture = parse_clauses("~b\n".as_bytes(), &mut encoder).unwrap();
//!
//! let engine = ResolutionEngine::new(axioms, conjecture, SaturationOptions::default());
//! let derivation = engine.saturate(&mut Indefinite);
//!
//! assert!(matches!(derivation.outcome, SaturationOutcome::Refuted { .. }));
//! let trace = derivation.proof_state.render_trace(&encoder);
//! assert_eq!("[  4] : (b); resolvent 1,2", trace[3]);
//! ```
#[doc(hidden)]
pub mod asserts;
pub mod containers;
pub mod encoding;
pub mod engine;
pub mod input;
pub mod statistics;
pub mod termination;
mod trace;

pub use convert_case;

pub use crate::encoding::Clause;
pub use crate::encoding::ClauseEncoder;
pub use crate::engine::Derivation;
pub use crate::engine::ResolutionEngine;
pub use crate::engine::SaturationOptions;
pub use crate::engine::SaturationOutcome;
