//! The resolution engine: breadth-first saturation of a clause set with subsumption.
//!
//! See [`ResolutionEngine`] for a description of the search.
mod derivation_node;
mod proof_state;
mod resolution_engine;
mod saturation_options;
mod saturation_statistics;

pub use derivation_node::*;
pub use proof_state::ProofState;
pub use resolution_engine::*;
pub use saturation_options::SaturationOptions;
pub use saturation_statistics::SaturationStatistics;
