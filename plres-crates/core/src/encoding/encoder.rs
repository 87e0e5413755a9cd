use clause_format::COMMENT;
use clause_format::DISJUNCTION;
use clause_format::NEGATION;
use num::BigUint;
use num::One;
use num::Zero;

use super::AtomTable;
use super::Clause;
use super::EncodingError;

/// Translates between literal strings and [`Clause`]s.
///
/// The encoder owns the [`AtomTable`] for one run, so all clauses that are compared with each
/// other must be produced by the same encoder.
#[derive(Clone, Debug, Default)]
pub struct ClauseEncoder {
    atoms: AtomTable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Polarity {
    Positive,
    Negative,
}

impl ClauseEncoder {
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// Returns the bit position of the atom `name`, growing the atom table if needed.
    pub fn encode_atom(&mut self, name: &str) -> usize {
        self.atoms.encode_atom(name)
    }

    /// Encode a disjunction of literals, where every literal is an atom name optionally prefixed
    /// with the negation marker.
    ///
    /// Surrounding whitespace of a literal is ignored, and so is whitespace between the negation
    /// marker and the atom name. An atom name may not itself contain whitespace or any of the
    /// format markers (`~`, `|`, `#`), so literals such as `two words` or `~~a` are rejected
    /// with [`EncodingError::InvalidAtomName`].
    ///
    /// All literals are checked before any atom is registered; when one of them is malformed the
    /// atom table is left untouched.
    ///
    /// # Example
    /// ```
    /// # use plres_core::encoding::ClauseEncoder;
    /// let mut encoder = ClauseEncoder::default();
    ///
    /// let clause = encoder.encode_clause(["a", "~b"]).unwrap();
    /// assert_eq!(clause, encoder.encode_clause(["~b", "a"]).unwrap());
    /// assert_eq!(vec!["a", "~b"], encoder.decode_clause(&clause));
    /// ```
    pub fn encode_clause<Literal: AsRef<str>>(
        &mut self,
        literals: impl IntoIterator<Item = Literal>,
    ) -> Result<Clause, EncodingError> {
        let literals = literals.into_iter().collect::<Vec<_>>();
        let parsed = literals
            .iter()
            .map(|literal| parse_literal(literal.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positive = BigUint::zero();
        let mut negative = BigUint::zero();

        for (polarity, atom) in parsed {
            let code = BigUint::one() << self.atoms.encode_atom(atom);
            match polarity {
                Polarity::Positive => positive |= code,
                Polarity::Negative => negative |= code,
            }
        }

        Ok(Clause::new(positive, negative))
    }

    /// The literals of `clause`, ordered lexicographically by atom name.
    ///
    /// When an atom occurs with both polarities, the positive literal comes first.
    pub fn decode_clause(&self, clause: &Clause) -> Vec<String> {
        let mut literals = vec![];

        for (index, name) in self.atoms.by_name() {
            let bit = index as u64;

            if clause.positive().bit(bit) {
                literals.push(name.to_owned());
            }
            if clause.negative().bit(bit) {
                literals.push(format!("{NEGATION}{name}"));
            }
        }

        literals
    }
}

fn parse_literal(literal: &str) -> Result<(Polarity, &str), EncodingError> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Err(EncodingError::EmptyLiteral);
    }

    let (polarity, atom) = match literal.strip_prefix(NEGATION) {
        Some(atom) => (Polarity::Negative, atom.trim_start()),
        None => (Polarity::Positive, literal),
    };

    if atom.is_empty() {
        return Err(EncodingError::MissingAtom(literal.to_owned()));
    }

    let is_reserved = |c: char| c.is_whitespace() || [NEGATION, DISJUNCTION, COMMENT].contains(&c);
    if atom.chars().any(is_reserved) {
        return Err(EncodingError::InvalidAtomName(atom.to_owned()));
    }

    Ok((polarity, atom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_order_does_not_matter() {
        let mut encoder = ClauseEncoder::default();

        let first = encoder.encode_clause(["a", "~b"]).unwrap();
        let second = encoder.encode_clause(["~b", "a"]).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn repeated_literals_collapse() {
        let mut encoder = ClauseEncoder::default();

        let clause = encoder.encode_clause(["a", "a", "~b"]).unwrap();

        assert_eq!(2, clause.num_literals());
    }

    #[test]
    fn negated_literals_use_the_negative_bitset() {
        let mut encoder = ClauseEncoder::default();

        let clause = encoder.encode_clause(["~p", "q"]).unwrap();

        assert!(clause.negative().bit(0));
        assert!(clause.positive().bit(1));
        assert!(!clause.positive().bit(0));
    }

    #[test]
    fn both_polarities_make_a_tautology() {
        let mut encoder = ClauseEncoder::default();

        assert!(encoder.encode_clause(["a", "b", "~a"]).unwrap().is_tautology());
    }

    #[test]
    fn decoding_is_lexicographic_by_atom_name() {
        let mut encoder = ClauseEncoder::default();

        let clause = encoder.encode_clause(["zeta", "~alpha", "mid"]).unwrap();

        assert_eq!(vec!["~alpha", "mid", "zeta"], encoder.decode_clause(&clause));
    }

    #[test]
    fn decoding_a_tautology_lists_positive_first() {
        let mut encoder = ClauseEncoder::default();

        let clause = encoder.encode_clause(["~a", "a"]).unwrap();

        assert_eq!(vec!["a", "~a"], encoder.decode_clause(&clause));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut encoder = ClauseEncoder::default();

        let spaced = encoder.encode_clause([" a ", "~ b"]).unwrap();
        let tight = encoder.encode_clause(["a", "~b"]).unwrap();

        assert_eq!(spaced, tight);
    }

    #[test]
    fn empty_literal_is_rejected() {
        let mut encoder = ClauseEncoder::default();

        assert_eq!(
            Err(EncodingError::EmptyLiteral),
            encoder.encode_clause(["a", ""])
        );
    }

    #[test]
    fn bare_negation_is_rejected() {
        let mut encoder = ClauseEncoder::default();

        assert_eq!(
            Err(EncodingError::MissingAtom("~".to_owned())),
            encoder.encode_clause(["~"])
        );
    }

    #[test]
    fn atom_names_with_reserved_characters_are_rejected() {
        let mut encoder = ClauseEncoder::default();

        assert_eq!(
            Err(EncodingError::InvalidAtomName("~a".to_owned())),
            encoder.encode_clause(["~~a"])
        );
        assert_eq!(
            Err(EncodingError::InvalidAtomName("a b".to_owned())),
            encoder.encode_clause(["a b"])
        );
    }

    #[test]
    fn rejected_clause_does_not_grow_the_atom_table() {
        let mut encoder = ClauseEncoder::default();

        let _ = encoder.encode_clause(["fresh", ""]).unwrap_err();

        assert!(encoder.atoms().is_empty());
    }

    #[test]
    fn more_atoms_than_fit_in_a_machine_word() {
        let mut encoder = ClauseEncoder::default();
        let names = (0..70).map(|i| format!("x{i:02}")).collect::<Vec<_>>();

        let clause = encoder.encode_clause(&names).unwrap();

        assert_eq!(70, encoder.atoms().len());
        assert_eq!(70, clause.num_literals());
        assert!(clause.positive().bit(69));
        assert_eq!(names, encoder.decode_clause(&clause));
    }
}
