use super::TerminationCondition;

/// Stops as soon as either of the two wrapped conditions wants to stop.
///
/// Both conditions are informed of every selected pivot, so budgets on either side keep counting.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    pub fn new(first: T1, second: T2) -> Self {
        Combinator { first, second }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> bool {
        self.first.should_stop() || self.second.should_stop()
    }

    fn pivot_selected(&mut self) {
        self.first.pivot_selected();
        self.second.pivot_selected();
    }
}
