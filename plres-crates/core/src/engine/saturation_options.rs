/// Options which control the redundancy checks of the [`ResolutionEngine`](super::ResolutionEngine).
///
/// Disabling either check never makes the search unsound; new clauses which are equal to an
/// existing clause are always discarded, so the search still terminates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaturationOptions {
    /// Discard a resolvent if it is subsumed by a clause which has already been derived.
    pub forward_subsumption: bool,
    /// Mask the existing nodes which are subsumed by a newly derived resolvent.
    pub backward_subsumption: bool,
}

impl Default for SaturationOptions {
    fn default() -> Self {
        SaturationOptions {
            forward_subsumption: true,
            backward_subsumption: true,
        }
    }
}
