use itertools::Itertools;

use crate::containers::HashMap;

/// Maps atom names to their bit position, assigned in first-seen order.
///
/// The table only grows; once an atom has received an index it keeps it for the lifetime of the
/// table.
#[derive(Clone, Debug, Default)]
pub struct AtomTable {
    indices: HashMap<String, usize>,
    names: Vec<String>,
}

impl AtomTable {
    /// Returns the index of `name`, allocating the next free index if the atom is new.
    pub fn encode_atom(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }

        let index = self.names.len();
        let _ = self.indices.insert(name.to_owned(), index);
        self.names.push(name.to_owned());

        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the `(index, name)` pairs ordered lexicographically by name.
    ///
    /// This order is independent of the order in which atoms were encountered, which makes it
    /// suitable for displaying clauses.
    pub fn by_name(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (index, name.as_str()))
            .sorted_by(|(_, lhs), (_, rhs)| lhs.cmp(rhs))
    }
}
