//! Sorted uniqueness container with navigation queries.
//!
//! `SortedRoster<T>` stores unique values where BOTH uniqueness and iteration
//! order come from the element type's `Ord` contract. There is no separate
//! equality check: two elements comparing `Equal` are duplicates even if
//! their other fields differ. For `Member` the contract keys off the name,
//! so iteration is strictly ascending by name.
//!
//! Navigation follows the usual strict-bound convention: `higher` and
//! `lower` exclude elements comparing `Equal` to the probe.
//!
//! # Determinism
//! - Iteration is strictly ascending under `Ord`, stable across runs.
//! - Duplicate handling is first-insert-wins, same as `Roster`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Bound;

/// Error returned by endpoint queries on a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterError {
    /// The queried container holds no elements.
    Empty,
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Empty => write!(f, "roster is empty"),
        }
    }
}

impl std::error::Error for RosterError {}

/// A set of unique values under the element's ordering contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedRoster<T: Ord> {
    members: BTreeSet<T>,
}

impl<T: Ord> SortedRoster<T> {
    /// Creates an empty sorted roster.
    pub fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Adds a value in sorted position, returning whether it was inserted.
    ///
    /// If a stored element compares `Equal` to `value`, the add is a no-op
    /// and the stored element is kept (first-insert-wins). Note this keys
    /// off `Ord` alone; no `Eq` check is consulted.
    pub fn add(&mut self, value: T) -> bool {
        self.members.insert(value)
    }

    /// Returns the minimum element, or `RosterError::Empty`.
    pub fn first(&self) -> Result<&T, RosterError> {
        self.members.first().ok_or(RosterError::Empty)
    }

    /// Returns the maximum element, or `RosterError::Empty`.
    pub fn last(&self) -> Result<&T, RosterError> {
        self.members.last().ok_or(RosterError::Empty)
    }

    /// Returns the smallest stored element strictly greater than `probe`.
    ///
    /// An element comparing `Equal` to the probe is not a candidate. Returns
    /// `None` when the probe is at or past the maximum.
    pub fn higher(&self, probe: &T) -> Option<&T> {
        self.members
            .range((Bound::Excluded(probe), Bound::Unbounded))
            .next()
    }

    /// Returns the largest stored element strictly less than `probe`.
    ///
    /// An element comparing `Equal` to the probe is not a candidate. Returns
    /// `None` when the probe is at or before the minimum.
    pub fn lower(&self, probe: &T) -> Option<&T> {
        self.members
            .range((Bound::Unbounded, Bound::Excluded(probe)))
            .next_back()
    }

    /// Returns whether an element comparing `Equal` to `probe` is stored.
    #[inline]
    pub fn contains(&self, probe: &T) -> bool {
        self.members.contains(probe)
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

    /// Iterates in strictly ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.members.iter()
    }
}

impl<T: Ord> Default for SortedRoster<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedRoster<T> {
    /// Collects with first-insert-wins semantics across the whole stream.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut roster = Self::new();
        for value in iter {
            roster.add(value);
        }
        roster
    }
}

impl<T: Ord> IntoIterator for SortedRoster<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedRoster<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
