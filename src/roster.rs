//! Hash-based uniqueness container.
//!
//! `Roster<T>` stores unique values, where uniqueness is decided entirely by
//! the element type's `Eq`/`Hash` contract. For `Member` that contract keys
//! off the name alone, so a roster holds at most one member per name.
//!
//! # Determinism
//! - Iteration order is unspecified and may differ across runs. Callers who
//!   need an order should use `SortedRoster` instead.
//! - Duplicate handling is first-insert-wins: the stored element is never
//!   replaced by a later equal insert.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// A set of unique values under the element's equality contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster<T: Eq + Hash> {
    members: HashSet<T>,
}

impl<T: Eq + Hash> Roster<T> {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self {
            members: HashSet::new(),
        }
    }

    /// Adds a value, returning whether it was inserted.
    ///
    /// If an equal element is already stored, `value` is dropped and the
    /// stored element is kept unchanged (first-insert-wins). Insertion never
    /// fails; a duplicate add is a no-op.
    pub fn add(&mut self, value: T) -> bool {
        self.members.insert(value)
    }

    /// Returns whether an element equal to `probe` is stored.
    #[inline]
    pub fn contains(&self, probe: &T) -> bool {
        self.members.contains(probe)
    }

    /// Returns the stored element equal to `probe`, if any.
    ///
    /// The returned element may differ from `probe` in fields outside the
    /// equality contract. This is how the first-inserted variant of a
    /// duplicate is observed.
    #[inline]
    pub fn get(&self, probe: &T) -> Option<&T> {
        self.members.get(probe)
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over stored elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }
}

impl<T: Eq + Hash> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Roster<T> {
    /// Collects with first-insert-wins semantics across the whole stream.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut roster = Self::new();
        for value in iter {
            roster.add(value);
        }
        roster
    }
}

impl<T: Eq + Hash> IntoIterator for Roster<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Roster<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;

    fn member(name: &str, age: u32, gender: &str) -> Member {
        Member::new(name, age, gender).unwrap()
    }

    #[test]
    fn deduplicates_by_name() {
        let mut roster = Roster::new();
        assert!(roster.add(member("Zia", 22, "Female")));
        assert!(!roster.add(member("Zia", 22, "Female"))); // exact duplicate
        assert!(roster.add(member("Alex", 24, "Male")));
        assert!(!roster.add(member("Zia", 30, "Female"))); // same name, new age
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn first_insert_wins_on_duplicate() {
        let mut roster = Roster::new();
        roster.add(member("Zia", 22, "Female"));
        roster.add(member("Zia", 30, "Female"));
        let stored = roster.get(&member("Zia", 0, "")).unwrap();
        assert_eq!(stored.age(), 22);
    }

    #[test]
    fn contains_uses_the_equality_contract() {
        let mut roster = Roster::new();
        roster.add(member("Alex", 24, "Male"));
        // Probe differs in every non-key field.
        assert!(roster.contains(&member("Alex", 99, "Female")));
        assert!(!roster.contains(&member("Bob", 24, "Male")));
    }

    #[test]
    fn collects_from_iterator_keeping_first() {
        let roster: Roster<Member> = [
            member("Zia", 22, "Female"),
            member("Zia", 30, "Female"),
            member("Alex", 24, "Male"),
        ]
        .into_iter()
        .collect();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(&member("Zia", 0, "")).unwrap().age(), 22);
    }

    #[test]
    fn empty_roster() {
        let roster: Roster<Member> = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert_eq!(roster.iter().count(), 0);
    }
}
