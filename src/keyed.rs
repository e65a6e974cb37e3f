//! Keyed containers.
//!
//! `KeyedRoster<K, V>` and `SortedKeyedRoster<K, V>` associate values with
//! unique keys. Unlike the set containers, a duplicate `put` OVERWRITES the
//! stored value and hands the previous one back (last-write-wins). The two
//! rules are deliberately dual: a set protects the first element stored
//! under an identity, a map tracks the latest value stored under a key.
//!
//! # Determinism
//! - `KeyedRoster` iterates in unspecified order.
//! - `SortedKeyedRoster` iterates in strictly ascending key order.

use crate::sorted::RosterError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A hash-keyed map with last-write-wins puts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedRoster<K: Eq + Hash, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> KeyedRoster<K, V> {
    /// Creates an empty keyed roster.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts or overwrites, returning the previous value for the key.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes and returns the value stored under `key`, if any.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns whether a value is stored under `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns whether any stored value equals `probe`. Linear scan.
    pub fn contains_value(&self, probe: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.values().any(|v| v == probe)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V> Default for KeyedRoster<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for KeyedRoster<K, V> {
    /// Collects with last-write-wins semantics across the whole stream.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut roster = Self::new();
        for (key, value) in iter {
            roster.put(key, value);
        }
        roster
    }
}

/// A sorted-key map with last-write-wins puts and endpoint queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedKeyedRoster<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> SortedKeyedRoster<K, V> {
    /// Creates an empty sorted keyed roster.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts or overwrites, returning the previous value for the key.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Removes and returns the value stored under `key`, if any.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns whether a value is stored under `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns whether any stored value equals `probe`. Linear scan.
    pub fn contains_value(&self, probe: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.values().any(|v| v == probe)
    }

    /// Returns the entry with the minimum key, or `RosterError::Empty`.
    pub fn first_entry(&self) -> Result<(&K, &V), RosterError> {
        self.entries.first_key_value().ok_or(RosterError::Empty)
    }

    /// Returns the entry with the maximum key, or `RosterError::Empty`.
    pub fn last_entry(&self) -> Result<(&K, &V), RosterError> {
        self.entries.last_key_value().ok_or(RosterError::Empty)
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in strictly ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }
}

impl<K: Ord, V> Default for SortedKeyedRoster<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedKeyedRoster<K, V> {
    /// Collects with last-write-wins semantics across the whole stream.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut roster = Self::new();
        for (key, value) in iter {
            roster.put(key, value);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_and_returns_previous() {
        let mut countries = KeyedRoster::new();
        assert_eq!(countries.put("CN", "China"), None);
        let previous = countries.put("CN", "People's Republic of China");
        assert_eq!(previous, Some("China"));
        assert_eq!(countries.get(&"CN"), Some(&"People's Republic of China"));
        assert_eq!(countries.len(), 1);
    }

    #[test]
    fn remove_shrinks_the_roster() {
        let mut countries = KeyedRoster::new();
        countries.put("IN", "India");
        countries.put("UK", "United Kingdom");
        assert_eq!(countries.remove(&"UK"), Some("United Kingdom"));
        assert_eq!(countries.remove(&"UK"), None);
        assert_eq!(countries.len(), 1);
    }

    #[test]
    fn key_and_value_membership() {
        let mut countries = KeyedRoster::new();
        countries.put("US", "United States");
        countries.put("IN", "India");
        assert!(countries.contains_key(&"US"));
        assert!(!countries.contains_key(&"FR"));
        assert!(countries.contains_value(&"India"));
        assert!(!countries.contains_value(&"France"));
    }

    #[test]
    fn sorted_key_and_value_membership() {
        let mut countries = SortedKeyedRoster::new();
        countries.put("US", "United States");
        countries.put("IN", "India");
        assert!(countries.contains_key(&"IN"));
        assert!(!countries.contains_key(&"FR"));
        assert!(countries.contains_value(&"United States"));
        assert!(!countries.contains_value(&"France"));
    }

    #[test]
    fn sorted_keys_iterate_ascending() {
        let mut countries = SortedKeyedRoster::new();
        countries.put("US", "United States");
        countries.put("IN", "India");
        countries.put("CN", "China");
        let keys: Vec<&str> = countries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["CN", "IN", "US"]);
    }

    #[test]
    fn sorted_endpoints() {
        let mut countries = SortedKeyedRoster::new();
        countries.put("US", "United States");
        countries.put("CN", "China");
        assert_eq!(countries.first_entry().unwrap().0, &"CN");
        assert_eq!(countries.last_entry().unwrap().0, &"US");
    }

    #[test]
    fn sorted_endpoints_fail_on_empty() {
        let countries: SortedKeyedRoster<&str, &str> = SortedKeyedRoster::new();
        assert_eq!(countries.first_entry(), Err(RosterError::Empty));
        assert_eq!(countries.last_entry(), Err(RosterError::Empty));
    }

    #[test]
    fn collect_is_last_write_wins() {
        let countries: KeyedRoster<&str, &str> =
            [("CN", "China"), ("CN", "People's Republic of China")]
                .into_iter()
                .collect();
        assert_eq!(countries.get(&"CN"), Some(&"People's Republic of China"));
    }
}
