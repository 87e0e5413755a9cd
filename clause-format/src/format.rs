/// Marks a literal as negated when it prefixes the atom name.
pub const NEGATION: char = '~';

/// Separates the literals of a clause.
pub const DISJUNCTION: char = '|';

/// Starts a comment which runs until the end of the line.
pub const COMMENT: char = '#';
