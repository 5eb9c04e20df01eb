//! Insertion-ordered owner accumulator.

use std::collections::HashSet;

/// An ordered, duplicate-free list of owner handles.
///
/// Owners keep the order of their first insertion; re-inserting an owner is a
/// no-op and never moves it.
#[derive(Debug, Clone, Default)]
pub struct OwnerSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl OwnerSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `owner` unless it is already present.
    ///
    /// Returns true if the owner was added.
    pub fn insert(&mut self, owner: &str) -> bool {
        if self.seen.contains(owner) {
            return false;
        }
        self.seen.insert(owner.to_string());
        self.order.push(owner.to_string());
        true
    }

    /// Returns the number of distinct owners.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no owner has been added.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns true if `owner` is present.
    pub fn contains(&self, owner: &str) -> bool {
        self.seen.contains(owner)
    }

    /// Iterates owners in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Consumes the set, returning owners in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<'a> Extend<&'a str> for OwnerSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for owner in iter {
            self.insert(owner);
        }
    }
}

impl<'a> FromIterator<&'a str> for OwnerSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_order() {
        let set: OwnerSet = ["@b", "@a", "@b", "@c", "@a"].into_iter().collect();
        assert_eq!(set.into_vec(), vec!["@b", "@a", "@c"]);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = OwnerSet::new();
        assert!(set.insert("@a"));
        assert!(!set.insert("@a"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("@a"));
    }

    #[test]
    fn duplicates_are_exact_string_matches() {
        let set: OwnerSet = ["@Team", "@team"].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_set() {
        let set = OwnerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
