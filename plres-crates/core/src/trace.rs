//! Turning a [`ProofState`] into the steps of a derivation trace.
use clause_format::trace::TraceOrigin;
use clause_format::trace::TraceStep;

use crate::encoding::ClauseEncoder;
use crate::engine::DerivationNode;
use crate::engine::NodeOrigin;
use crate::engine::ProofState;

impl DerivationNode {
    /// The trace step describing this node, with its clause decoded by `encoder`.
    pub fn trace_step(&self, encoder: &ClauseEncoder) -> TraceStep {
        let origin = match self.origin() {
            NodeOrigin::Axiom => TraceOrigin::Axiom,
            NodeOrigin::Resolvent(first, second) => {
                TraceOrigin::Resolvent(first.step_index(), second.step_index())
            }
        };

        TraceStep {
            index: self.id().step_index(),
            literals: encoder.decode_clause(self.clause()),
            origin,
            masked_by: self.masked_by().iter().map(|id| id.step_index()).collect(),
        }
    }
}

impl ProofState {
    /// One trace step per node, in node order.
    pub fn trace_steps<'a>(
        &'a self,
        encoder: &'a ClauseEncoder,
    ) -> impl Iterator<Item = TraceStep> + 'a {
        self.nodes().map(|node| node.trace_step(encoder))
    }

    /// The textual trace, one line per node.
    pub fn render_trace(&self, encoder: &ClauseEncoder) -> Vec<String> {
        self.trace_steps(encoder)
            .map(|step| step.to_string())
            .collect()
    }
}
