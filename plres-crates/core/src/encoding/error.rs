use thiserror::Error;

/// The reasons a list of literals cannot be encoded as a clause.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("encountered an empty literal")]
    EmptyLiteral,

    #[error("the literal '{0}' does not name an atom")]
    MissingAtom(String),

    #[error("'{0}' is not a valid atom name")]
    InvalidAtomName(String),
}
