//! Conditions under which the saturation loop gives up before reaching a verdict.
//!
//! The loop polls its [`TerminationCondition`] once per pivot, before any pair with that pivot is
//! resolved. Stopping therefore never leaves a half-processed pivot behind, and a run that is not
//! stopped yields exactly the trace it would have produced without a condition.

mod budgets;
mod combinator;

pub use budgets::*;
pub use combinator::*;

/// Decides when the prover should stop searching for a refutation.
pub trait TerminationCondition {
    /// Returns `true` when the prover should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called every time the saturation loop moves on to a new pivot clause.
    fn pivot_selected(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(TerminationCondition::should_stop)
    }

    fn pivot_selected(&mut self) {
        if let Some(condition) = self {
            condition.pivot_selected();
        }
    }
}

/// Never stops; the prover runs until it refutes or saturates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
