//! The module containing the individual steps of a derivation trace.
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Write;
use std::num::NonZeroUsize;

use itertools::Itertools;

use crate::DISJUNCTION;

/// The 1-based position of a step in the trace.
pub type StepIndex = NonZeroUsize;

/// How the clause of a [`TraceStep`] came to be part of the derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOrigin {
    /// The clause was given as input.
    Axiom,
    /// The clause is the resolvent of the two given steps.
    Resolvent(StepIndex, StepIndex),
}

/// One line of the derivation trace.
///
/// The [`Display`] implementation produces the textual form of the step:
/// ```
/// # use std::num::NonZeroUsize;
/// # use clause_format::trace::*;
/// let index = |i: usize| NonZeroUsize::new(i).unwrap();
///
/// let step = TraceStep {
///     index: index(3),
///     literals: vec!["b".to_owned()],
///     origin: TraceOrigin::Resolvent(index(1), index(2)),
///     masked_by: vec![],
/// };
/// assert_eq!("[  3] : (b); resolvent 1,2", step.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceStep {
    pub index: StepIndex,
    /// The literals of the clause, in display order.
    pub literals: Vec<String>,
    pub origin: TraceOrigin,
    /// The steps whose clauses subsume this one. Empty if the step is still active.
    pub masked_by: Vec<StepIndex>,
}

impl Display for TraceStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {:>2}] : (", self.index)?;
        for (position, literal) in self.literals.iter().enumerate() {
            if position > 0 {
                f.write_char(DISJUNCTION)?;
            }
            f.write_str(literal)?;
        }
        f.write_char(')')?;

        match self.origin {
            TraceOrigin::Axiom => write!(f, "; axiom")?,
            TraceOrigin::Resolvent(first, second) => write!(f, "; resolvent {first},{second}")?,
        }

        if !self.masked_by.is_empty() {
            write!(f, "; masked by {}", self.masked_by.iter().format(","))?;
        }

        Ok(())
    }
}

/// The verdict which closes a derivation trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conclusion {
    /// The empty clause was derived; the input is unsatisfiable.
    Refutation,
    /// All clause pairs were exhausted without deriving the empty clause.
    Saturated,
    /// The search was stopped before reaching either verdict.
    Unknown,
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Refutation => write!(f, "REFUTATION FOUND"),
            Conclusion::Saturated => write!(f, "SATURATED"),
            Conclusion::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
