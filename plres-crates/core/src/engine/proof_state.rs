use super::DerivationNode;
use super::NodeId;
use super::NodeOrigin;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::encoding::Clause;
use crate::plres_assert_advanced;
use crate::plres_assert_moderate;
use crate::plres_assert_simple;

/// All clauses derived so far, in the order in which they were accepted.
///
/// Nodes are only ever appended; masking changes the status of a node but never removes it.
#[derive(Clone, Debug, Default)]
pub struct ProofState {
    nodes: KeyedVec<NodeId, DerivationNode>,
    clauses: HashSet<Clause>,
}

impl ProofState {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &DerivationNode {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DerivationNode> + '_ {
        self.nodes.iter()
    }

    /// The id that the next appended node will receive.
    pub fn next_node_id(&self) -> NodeId {
        self.nodes.next_key()
    }

    /// Returns `true` if `clause` has been accepted before, either as input or as resolvent.
    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Returns `true` if some accepted clause subsumes `clause`.
    pub fn is_subsumed(&self, clause: &Clause) -> bool {
        self.clauses.iter().any(|existing| existing.subsumes(clause))
    }

    pub(crate) fn add_axiom(&mut self, clause: Clause) -> NodeId {
        self.push(clause, NodeOrigin::Axiom)
    }

    pub(crate) fn add_resolvent(&mut self, clause: Clause, pivot: NodeId, partner: NodeId) -> NodeId {
        plres_assert_simple!(
            pivot.index() < self.len() && partner.index() < self.len(),
            "resolvent sources must be existing nodes"
        );
        plres_assert_moderate!(pivot <= partner);

        self.push(clause, NodeOrigin::Resolvent(pivot, partner))
    }

    /// Mark every node whose clause is subsumed by `clause` as masked by `masker`. Returns the
    /// number of nodes that were marked.
    pub(crate) fn mask_subsumed_by(&mut self, clause: &Clause, masker: NodeId) -> usize {
        let mut num_masked = 0;

        for node in self.nodes.iter_mut() {
            if clause.subsumes(node.clause()) {
                plres_assert_simple!(node.id() < masker);
                node.mask(masker);
                num_masked += 1;
            }
        }

        num_masked
    }

    fn push(&mut self, clause: Clause, origin: NodeOrigin) -> NodeId {
        let is_new = self.clauses.insert(clause.clone());
        plres_assert_simple!(is_new, "a clause is only accepted once");

        let id = self.nodes.next_key();
        let pushed = self.nodes.push(DerivationNode::new(id, clause, origin));
        plres_assert_advanced!(self.clauses.len() == self.nodes.len());

        pushed
    }
}

#[cfg(test)]
mod tests {
    use num::BigUint;
    use num::One;

    use super::*;

    fn literal(index: usize) -> BigUint {
        BigUint::one() << index
    }

    #[test]
    fn node_ids_follow_insertion_order() {
        let mut state = ProofState::default();

        let first = state.add_axiom(Clause::new(literal(0), BigUint::default()));
        let second = state.add_axiom(Clause::new(BigUint::default(), literal(0)));
        let third = state.add_resolvent(Clause::default(), first, second);

        assert_eq!(vec![0, 1, 2], vec![first.index(), second.index(), third.index()]);
        assert_eq!(NodeOrigin::Resolvent(first, second), state.node(third).origin());
        assert!(state.contains(&Clause::default()));
    }

    #[test]
    fn masking_marks_all_subsumed_nodes() {
        let mut state = ProofState::default();
        let a_or_b = state.add_axiom(Clause::new(literal(0) | literal(1), BigUint::default()));
        let not_b = state.add_axiom(Clause::new(BigUint::default(), literal(1)));

        let unit_a = Clause::new(literal(0), BigUint::default());
        let masker = state.next_node_id();
        let num_masked = state.mask_subsumed_by(&unit_a, masker);

        assert_eq!(1, num_masked);
        assert_eq!(&[masker], state.node(a_or_b).masked_by());
        assert!(!state.node(not_b).is_masked());
    }

    #[test]
    fn subsumption_is_checked_against_all_accepted_clauses() {
        let mut state = ProofState::default();
        let _ = state.add_axiom(Clause::new(literal(0), BigUint::default()));

        assert!(state.is_subsumed(&Clause::new(literal(0), literal(1))));
        assert!(!state.is_subsumed(&Clause::new(literal(1), BigUint::default())));
    }
}
