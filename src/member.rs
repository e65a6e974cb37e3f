//! The `Member` value type.
//!
//! A `Member` is an immutable record of a person with a deliberately narrow
//! identity: equality, hash, and ordering are all derived from the `name`
//! field alone. Two members with the same name but different age or gender
//! are the same member as far as every container in this crate is concerned.
//!
//! # Invariant
//! - Equality is reflexive, symmetric, and transitive (it delegates to
//!   `Name`'s string equality).
//! - Equal members hash identically (`Hash` feeds exactly the fields
//!   `PartialEq` compares).
//! - Ordering is total and consistent with equality: `cmp` returns `Equal`
//!   if and only if `eq` returns `true`. Sorted containers rely on this.

use crate::name::{Name, NameError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable member record, identified by name.
///
/// Fields are private; a `Member` cannot be mutated after construction. To
/// "change" a member, construct a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    name: Name,
    age: u32,
    gender: String,
}

impl Member {
    /// Creates a member, validating the name.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
    ) -> Result<Self, NameError> {
        Ok(Self {
            name: Name::new(name)?,
            age,
            gender: gender.into(),
        })
    }

    /// Returns the member's name, the identity key.
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the member's age. Not part of the identity.
    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns the member's gender. Not part of the identity.
    #[inline]
    pub fn gender(&self) -> &str {
        &self.gender
    }
}

/// Equality by `name` only.
impl PartialEq for Member {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Member {}

/// Hash by `name` only, matching `PartialEq`.
impl Hash for Member {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Lexicographic ordering by `name` only, consistent with equality.
impl Ord for Member {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialOrd for Member {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Member {{ name: '{}', age: {}, gender: '{}' }}",
            self.name, self.age, self.gender
        )
    }
}
