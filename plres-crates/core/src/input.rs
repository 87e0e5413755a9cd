//! Reading clause files into encoded [`ClauseSet`]s.
use std::io::Read;

use clause_format::reader::ClauseReader;
use clause_format::reader::Error;
use log::warn;

use crate::encoding::ClauseEncoder;
use crate::encoding::ClauseSet;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read clauses: {0}")]
    Read(#[from] clause_format::reader::Error),
}

/// Parse every clause in `source` with the given encoder.
///
/// Lines which cannot be decoded as UTF-8 or cannot be encoded are reported as a warning and
/// skipped; the remaining lines are still parsed. Duplicate clauses are only kept once, in the
/// position of their first occurrence.
///
/// Files which are refuted together (the axioms and the negated conjecture) must be parsed with
/// the same encoder so their atoms share one table.
pub fn parse_clauses(
    source: impl Read,
    encoder: &mut ClauseEncoder,
) -> Result<ClauseSet, InputError> {
    let mut reader = ClauseReader::new(source);
    let mut clauses = ClauseSet::default();

    loop {
        let line = match reader.next_clause() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(Error::InvalidUtf8 { line_nr }) => {
                warn!("Skipping line {line_nr}: not valid UTF-8");
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        match encoder.encode_clause(&line.literals) {
            Ok(clause) => {
                let _ = clauses.insert(clause);
            }
            Err(error) => {
                warn!(
                    "Skipping line {} \"{}\": {error}",
                    line.line_nr, line.text
                );
            }
        }
    }

    Ok(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let source = "# a small theory\n\nrain | ~wet   # rule\n  wet\n";
        let mut encoder = ClauseEncoder::default();

        let clauses = parse_clauses(source.as_bytes(), &mut encoder).expect("in-memory source");

        let decoded = clauses
            .iter()
            .map(|clause| encoder.decode_clause(clause))
            .collect::<Vec<_>>();
        assert_eq!(vec![vec!["rain", "~wet"], vec!["wet"]], decoded);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let source = "a | \nb c\n~\nd\n";
        let mut encoder = ClauseEncoder::default();

        let clauses = parse_clauses(source.as_bytes(), &mut encoder).expect("in-memory source");

        assert_eq!(1, clauses.len());
        assert_eq!(1, encoder.atoms().len());
        assert_eq!(Some(0), encoder.atoms().index_of("d"));
    }

    #[test]
    fn lines_with_invalid_utf8_are_skipped() {
        let mut encoder = ClauseEncoder::default();

        let clauses =
            parse_clauses(&b"a\n\xff\xfe\n~a\n"[..], &mut encoder).expect("in-memory source");

        assert_eq!(2, clauses.len());
        assert_eq!(1, encoder.atoms().len());
    }

    #[test]
    fn duplicate_lines_are_merged() {
        let source = "a | b\nb | a\n~a\n";
        let mut encoder = ClauseEncoder::default();

        let clauses = parse_clauses(source.as_bytes(), &mut encoder).expect("in-memory source");

        assert_eq!(2, clauses.len());
    }

    #[test]
    fn files_parsed_with_one_encoder_share_atoms() {
        let mut encoder = ClauseEncoder::default();

        let axioms = parse_clauses("p | q\n".as_bytes(), &mut encoder).expect("in-memory source");
        let conjecture = parse_clauses("~q\n".as_bytes(), &mut encoder).expect("in-memory source");

        let q = encoder.encode_clause(["q"]).expect("valid clause");
        let axiom = axioms.iter().next().expect("one axiom");
        let negated = conjecture.iter().next().expect("one conjecture clause");
        assert_eq!(axiom.complement_mask(negated), q.positive().clone());
        assert_eq!(2, encoder.atoms().len());
    }
}
