use std::time::Instant;

use clause_format::trace::Conclusion;
use log::debug;
use log::info;

use super::NodeId;
use super::ProofState;
use super::SaturationOptions;
use super::SaturationStatistics;
use crate::containers::StorageKey;
use crate::encoding::Clause;
use crate::encoding::ClauseSet;
use crate::plres_assert_simple;
use crate::termination::TerminationCondition;

/// How a saturation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaturationOutcome {
    /// The empty clause was derived; the input is unsatisfiable.
    Refuted { empty_clause: NodeId },
    /// Every pair of active clauses has been resolved without deriving the empty clause.
    Saturated,
    /// The termination condition fired before a verdict was reached.
    Interrupted,
}

impl SaturationOutcome {
    pub fn is_refutation(&self) -> bool {
        matches!(self, SaturationOutcome::Refuted { .. })
    }
}

impl From<SaturationOutcome> for Conclusion {
    fn from(outcome: SaturationOutcome) -> Self {
        match outcome {
            SaturationOutcome::Refuted { .. } => Conclusion::Refutation,
            SaturationOutcome::Saturated => Conclusion::Saturated,
            SaturationOutcome::Interrupted => Conclusion::Unknown,
        }
    }
}

/// The result of [`ResolutionEngine::saturate`].
#[derive(Debug)]
pub struct Derivation {
    pub outcome: SaturationOutcome,
    pub proof_state: ProofState,
    pub statistics: SaturationStatistics,
}

/// Searches for a refutation of a clause set by breadth-first binary resolution.
///
/// Every input clause becomes an axiom node. The engine then takes the nodes in order as pivot
/// and resolves each pivot with itself and every later node, including the nodes which are
/// appended while that pivot is being processed. A pair is only resolved when the two clauses
/// clash on exactly one atom; resolving on one of several clashing atoms always produces a
/// tautology.
///
/// A resolvent is kept when it is not a tautology, has not been seen before and, with forward
/// subsumption enabled, is not subsumed by an accepted clause. With backward subsumption enabled
/// an accepted resolvent masks every node it subsumes; masked nodes are skipped as pivot but stay
/// available as partner.
///
/// # Example
/// ```
/// # use plres_core::encoding::ClauseEncoder;
/// # use plres_core::encoding::ClauseSet;
/// # use plres_core::engine::ResolutionEngine;
/// # use plres_core::engine::SaturationOptions;
/// # use plres_core::termination::Indefinite;
/// let mut encoder = ClauseEncoder::default();
/// let axioms = [vec!["rain", "~wet"], vec!["wet"]]
///     .into_iter()
///     .map(|literals| encoder.encode_clause(literals).unwrap())
///     .collect::<ClauseSet>();
/// let conjecture = [encoder.encode_clause(["~rain"]).unwrap()]
///     .into_iter()
///     .collect::<ClauseSet>();
///
/// let engine = ResolutionEngine::new(axioms, conjecture, SaturationOptions::default());
/// let derivation = engine.saturate(&mut Indefinite);
///
/// assert!(derivation.outcome.is_refutation());
/// ```
#[derive(Debug)]
pub struct ResolutionEngine {
    state: ProofState,
    options: SaturationOptions,
    statistics: SaturationStatistics,
}

impl ResolutionEngine {
    /// Create an engine for the union of `axioms` and `conjectures`.
    ///
    /// Axioms come first, followed by the conjecture clauses which are not also axioms. Empty
    /// and tautological input clauses are dropped.
    pub fn new(
        axioms: ClauseSet,
        conjectures: ClauseSet,
        options: SaturationOptions,
    ) -> ResolutionEngine {
        let mut inputs = axioms;
        inputs.extend(conjectures);

        let mut state = ProofState::default();
        let mut statistics = SaturationStatistics::default();

        for clause in inputs {
            if clause.is_empty() || clause.is_tautology() {
                debug!("Discarding input clause {clause:?}");
                statistics.num_discarded_inputs += 1;
                continue;
            }

            let _ = state.add_axiom(clause);
        }

        info!(
            "Starting saturation with {} input clauses ({} discarded)",
            state.len(),
            statistics.num_discarded_inputs
        );

        ResolutionEngine {
            state,
            options,
            statistics,
        }
    }

    pub fn proof_state(&self) -> &ProofState {
        &self.state
    }

    /// Run the saturation loop until the empty clause is derived, no new clause can be derived,
    /// or `termination` asks to stop.
    pub fn saturate(mut self, termination: &mut impl TerminationCondition) -> Derivation {
        let started_at = Instant::now();
        let outcome = self.search(termination);
        self.statistics.time_spent = started_at.elapsed();

        info!(
            "Saturation ended with {outcome:?} after deriving {} nodes",
            self.state.len()
        );

        Derivation {
            outcome,
            proof_state: self.state,
            statistics: self.statistics,
        }
    }

    fn search(&mut self, termination: &mut impl TerminationCondition) -> SaturationOutcome {
        let mut pivot = 0;

        while pivot < self.state.len() {
            if termination.should_stop() {
                debug!("Stopping before pivot {}", NodeId::create_from_index(pivot));
                return SaturationOutcome::Interrupted;
            }
            termination.pivot_selected();
            self.statistics.num_pivots += 1;

            let mut partner = pivot;
            while partner < self.state.len() {
                let pair = (
                    NodeId::create_from_index(pivot),
                    NodeId::create_from_index(partner),
                );
                if let Some(empty_clause) = self.resolve_pair(pair.0, pair.1) {
                    return SaturationOutcome::Refuted { empty_clause };
                }

                partner += 1;
            }

            pivot += 1;
            while pivot < self.state.len()
                && self
                    .state
                    .node(NodeId::create_from_index(pivot))
                    .is_masked()
            {
                pivot += 1;
            }
        }

        SaturationOutcome::Saturated
    }

    /// Resolve the clauses of `pivot` and `partner`. Returns the id of the new node if the pair
    /// produced the empty clause.
    fn resolve_pair(&mut self, pivot: NodeId, partner: NodeId) -> Option<NodeId> {
        self.statistics.num_pairs_examined += 1;

        let first = self.state.node(pivot).clause();
        let second = self.state.node(partner).clause();

        let elit = first.complement_mask(second);
        match elit.count_ones() {
            0 => return None,
            1 => {}
            _ => {
                self.statistics.num_multi_clash_pairs += 1;
                return None;
            }
        }

        let resolvent = first.resolvent(second, &elit);
        self.statistics.num_resolvents_generated += 1;

        if self.is_redundant(&resolvent) {
            return None;
        }

        let id = self.accept(resolvent, pivot, partner);
        self.state.node(id).clause().is_empty().then_some(id)
    }

    fn is_redundant(&mut self, resolvent: &Clause) -> bool {
        if resolvent.is_tautology() {
            self.statistics.num_tautologies += 1;
            true
        } else if self.state.contains(resolvent) {
            self.statistics.num_duplicates += 1;
            true
        } else if self.options.forward_subsumption && self.state.is_subsumed(resolvent) {
            self.statistics.num_forward_subsumed += 1;
            true
        } else {
            false
        }
    }

    fn accept(&mut self, resolvent: Clause, pivot: NodeId, partner: NodeId) -> NodeId {
        let id = self.state.next_node_id();

        if self.options.backward_subsumption && !resolvent.is_empty() {
            let num_masked = self.state.mask_subsumed_by(&resolvent, id);
            self.statistics.num_masked += num_masked as u64;
        }

        let added = self.state.add_resolvent(resolvent, pivot, partner);
        plres_assert_simple!(added == id);
        self.statistics.num_resolvents_accepted += 1;

        debug!("[{id}] resolvent of {pivot},{partner}");

        added
    }
}
