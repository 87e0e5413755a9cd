use num::BigUint;
use num::Zero;

/// A disjunction of literals, stored as two bitsets over the atom indices.
///
/// Bit `i` of `positive` is set if the atom with index `i` occurs unnegated, bit `i` of `negative`
/// if it occurs negated. Two clauses are equal exactly when both bitsets are equal, regardless of
/// the order in which their literals were given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clause {
    positive: BigUint,
    negative: BigUint,
}

impl Clause {
    pub fn new(positive: BigUint, negative: BigUint) -> Clause {
        Clause { positive, negative }
    }

    pub fn positive(&self) -> &BigUint {
        &self.positive
    }

    pub fn negative(&self) -> &BigUint {
        &self.negative
    }

    /// A clause is a tautology if some atom occurs in it with both polarities.
    pub fn is_tautology(&self) -> bool {
        !(&self.positive & &self.negative).is_zero()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_zero() && self.negative.is_zero()
    }

    pub fn num_literals(&self) -> u64 {
        self.positive.count_ones() + self.negative.count_ones()
    }

    /// Returns `true` if every literal of `self` also occurs in `other`.
    ///
    /// Every clause subsumes itself.
    pub fn subsumes(&self, other: &Clause) -> bool {
        is_subset(&self.positive, &other.positive) && is_subset(&self.negative, &other.negative)
    }

    /// The atoms which occur in `self` with the opposite polarity from `other`.
    pub fn complement_mask(&self, other: &Clause) -> BigUint {
        (&self.positive & &other.negative) | (&self.negative & &other.positive)
    }

    /// The union of both clauses with the atoms in `elit` removed from either polarity.
    pub fn resolvent(&self, other: &Clause, elit: &BigUint) -> Clause {
        Clause {
            positive: without(&self.positive | &other.positive, elit),
            negative: without(&self.negative | &other.negative, elit),
        }
    }
}

fn is_subset(subset: &BigUint, superset: &BigUint) -> bool {
    &(subset & superset) == subset
}

fn without(bits: BigUint, mask: &BigUint) -> BigUint {
    let overlap = &bits & mask;
    bits ^ overlap
}

#[cfg(test)]
mod tests {
    use num::One;

    use super::*;

    fn bits(indices: &[usize]) -> BigUint {
        indices
            .iter()
            .fold(BigUint::zero(), |acc, &index| acc | (BigUint::one() << index))
    }

    fn clause(positive: &[usize], negative: &[usize]) -> Clause {
        Clause::new(bits(positive), bits(negative))
    }

    #[test]
    fn default_clause_is_empty() {
        let empty = Clause::default();

        assert!(empty.is_empty());
        assert!(!empty.is_tautology());
        assert_eq!(0, empty.num_literals());
    }

    #[test]
    fn tautology_has_overlapping_polarities() {
        assert!(clause(&[0, 1], &[1]).is_tautology());
        assert!(!clause(&[0], &[1]).is_tautology());
    }

    #[test]
    fn subsumption_is_reflexive() {
        let c = clause(&[0, 3], &[2]);

        assert!(c.subsumes(&c));
    }

    #[test]
    fn subsumption_is_transitive() {
        let a = clause(&[0], &[]);
        let b = clause(&[0], &[1]);
        let c = clause(&[0, 2], &[1]);

        assert!(a.subsumes(&b));
        assert!(b.subsumes(&c));
        assert!(a.subsumes(&c));
        assert!(!c.subsumes(&a));
    }

    #[test]
    fn subsumption_respects_polarity() {
        assert!(!clause(&[0], &[]).subsumes(&clause(&[], &[0])));
    }

    #[test]
    fn empty_clause_subsumes_everything() {
        assert!(Clause::default().subsumes(&clause(&[4], &[7])));
    }

    #[test]
    fn complement_mask_finds_clashing_atoms_in_both_directions() {
        let a = clause(&[0, 1], &[2]);
        let b = clause(&[2], &[0, 3]);

        assert_eq!(bits(&[0, 2]), a.complement_mask(&b));
        assert_eq!(bits(&[0, 2]), b.complement_mask(&a));
    }

    #[test]
    fn resolvent_drops_the_clashing_atom_from_both_polarities() {
        let a = clause(&[0, 1], &[]);
        let b = clause(&[1], &[0]);
        let elit = a.complement_mask(&b);

        let resolvent = a.resolvent(&b, &elit);

        assert_eq!(clause(&[1], &[]), resolvent);
        assert!(!resolvent.positive().bit(0));
        assert!(!resolvent.negative().bit(0));
    }

    #[test]
    fn resolving_complementary_units_gives_the_empty_clause() {
        let a = clause(&[5], &[]);
        let b = clause(&[], &[5]);

        assert!(a.resolvent(&b, &a.complement_mask(&b)).is_empty());
    }

    #[test]
    fn bits_beyond_a_machine_word_are_handled() {
        let a = clause(&[3, 64, 130], &[]);
        let b = clause(&[200], &[130]);
        let elit = a.complement_mask(&b);

        assert_eq!(1, elit.count_ones());
        assert_eq!(clause(&[3, 64, 200], &[]), a.resolvent(&b, &elit));
    }
}
