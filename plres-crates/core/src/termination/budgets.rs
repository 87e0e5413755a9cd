use std::time::Duration;
use std::time::Instant;

use super::TerminationCondition;

/// Stops once a wall-clock budget has been used up.
#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    deadline: Instant,
}

impl TimeBudget {
    /// A budget of `budget`, measured from the moment of the call.
    pub fn starting_now(budget: Duration) -> TimeBudget {
        TimeBudget {
            deadline: Instant::now() + budget,
        }
    }
}

impl TerminationCondition for TimeBudget {
    fn should_stop(&mut self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Stops once a given number of pivot clauses has been processed.
#[derive(Clone, Copy, Debug)]
pub struct PivotBudget {
    remaining: u64,
}

impl PivotBudget {
    pub fn new(max_pivots: u64) -> PivotBudget {
        PivotBudget {
            remaining: max_pivots,
        }
    }
}

impl TerminationCondition for PivotBudget {
    fn should_stop(&mut self) -> bool {
        self.remaining == 0
    }

    fn pivot_selected(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }
}
