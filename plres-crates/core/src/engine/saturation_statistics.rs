use std::time::Duration;

use crate::statistics::log_statistic;

/// Counters collected during one saturation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaturationStatistics {
    /// Input clauses dropped because they were empty or tautological.
    pub num_discarded_inputs: u64,
    /// The number of clauses used as pivot.
    pub num_pivots: u64,
    /// The number of (pivot, partner) pairs which were compared.
    pub num_pairs_examined: u64,
    /// Pairs skipped because they clash on more than one atom.
    pub num_multi_clash_pairs: u64,
    /// Resolvents computed from pairs clashing on exactly one atom.
    pub num_resolvents_generated: u64,
    pub num_tautologies: u64,
    pub num_duplicates: u64,
    pub num_forward_subsumed: u64,
    /// How often a node was masked by a newer resolvent. A node can be masked more than once.
    pub num_masked: u64,
    /// Resolvents which were added as a node.
    pub num_resolvents_accepted: u64,
    pub time_spent: Duration,
}

impl SaturationStatistics {
    pub fn log(&self) {
        log_statistic("discardedInputs", self.num_discarded_inputs);
        log_statistic("pivots", self.num_pivots);
        log_statistic("pairsExamined", self.num_pairs_examined);
        log_statistic("multiClashPairs", self.num_multi_clash_pairs);
        log_statistic("resolventsGenerated", self.num_resolvents_generated);
        log_statistic("tautologies", self.num_tautologies);
        log_statistic("duplicates", self.num_duplicates);
        log_statistic("forwardSubsumed", self.num_forward_subsumed);
        log_statistic("masked", self.num_masked);
        log_statistic("resolventsAccepted", self.num_resolvents_accepted);
        log_statistic("saturationTime", self.time_spent.as_secs_f64());
    }
}
