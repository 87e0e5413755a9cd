use super::Clause;
use crate::containers::HashSet;

/// A set of distinct clauses which remembers the order in which they were first inserted.
///
/// Iteration follows insertion order, so the traversal order of a set built from a single parse
/// pass is deterministic.
#[derive(Clone, Debug, Default)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
    members: HashSet<Clause>,
}

impl ClauseSet {
    /// Insert `clause`, returning `false` if an equal clause is already present.
    pub fn insert(&mut self, clause: Clause) -> bool {
        if self.members.contains(&clause) {
            return false;
        }

        let _ = self.members.insert(clause.clone());
        self.clauses.push(clause);

        true
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.members.contains(clause)
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}

impl Extend<Clause> for ClauseSet {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        for clause in iter {
            let _ = self.insert(clause);
        }
    }
}

impl FromIterator<Clause> for ClauseSet {
    fn from_iter<T: IntoIterator<Item = Clause>>(iter: T) -> Self {
        let mut set = ClauseSet::default();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ClauseSet {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use num::BigUint;

    use super::*;

    fn unit(index: u32) -> Clause {
        Clause::new(BigUint::from(1u32) << index, BigUint::default())
    }

    #[test]
    fn duplicates_are_not_inserted_twice() {
        let mut set = ClauseSet::default();

        assert!(set.insert(unit(0)));
        assert!(!set.insert(unit(0)));
        assert_eq!(1, set.len());
    }

    #[test]
    fn iteration_follows_first_insertion() {
        let set: ClauseSet = [unit(2), unit(0), unit(2), unit(1)].into_iter().collect();

        assert_eq!(
            vec![unit(2), unit(0), unit(1)],
            set.into_iter().collect::<Vec<_>>()
        );
    }
}
