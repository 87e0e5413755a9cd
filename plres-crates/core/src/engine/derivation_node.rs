use std::fmt::Display;
use std::fmt::Formatter;

use clause_format::trace::StepIndex;

use crate::containers::StorageKey;
use crate::encoding::Clause;

/// The position of a [`DerivationNode`] in the [`ProofState`](super::ProofState), starting at
/// zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The 1-based index under which the node appears in a trace.
    pub fn step_index(self) -> StepIndex {
        StepIndex::MIN.saturating_add(self.0)
    }
}

impl StorageKey for NodeId {
    fn index(&self) -> usize {
        self.0
    }

    fn create_from_index(index: usize) -> Self {
        NodeId(index)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.step_index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeOrigin {
    /// An input clause, either an axiom or part of the negated conjecture.
    Axiom,
    /// The resolvent of the clauses of two earlier nodes.
    Resolvent(NodeId, NodeId),
}

/// One clause in the derivation, together with how it was obtained.
///
/// A node is masked once a later clause subsumes it. Masked nodes are no longer used as pivots,
/// but they stay in the derivation and can still be resolution partners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivationNode {
    id: NodeId,
    clause: Clause,
    origin: NodeOrigin,
    masked_by: Vec<NodeId>,
}

impl DerivationNode {
    pub(crate) fn new(id: NodeId, clause: Clause, origin: NodeOrigin) -> DerivationNode {
        DerivationNode {
            id,
            clause,
            origin,
            masked_by: vec![],
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn clause(&self) -> &Clause {
        &self.clause
    }

    pub fn origin(&self) -> NodeOrigin {
        self.origin
    }

    pub fn is_axiom(&self) -> bool {
        self.origin == NodeOrigin::Axiom
    }

    pub fn is_masked(&self) -> bool {
        !self.masked_by.is_empty()
    }

    /// The nodes whose clauses subsume this one, in the order they were derived.
    pub fn masked_by(&self) -> &[NodeId] {
        &self.masked_by
    }

    pub(crate) fn mask(&mut self, masker: NodeId) {
        self.masked_by.push(masker);
    }
}
