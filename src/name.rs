//! The `Name` key type.
//!
//! Provides `Name`, a validated, totally ordered string newtype used as the
//! equality and ordering key throughout the crate.
//!
//! # Determinism
//! - `Name` ordering is lexicographic by the inner `String` (byte order,
//!   identical to `str`'s `Ord`).
//! - Equality and hash are based solely on the inner `String`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated member name.
///
/// `Name` is the key every container in this crate deduplicates and orders
/// by. Construction rejects empty and all-whitespace input, so a `Name` held
/// by a container is always printable.
///
/// # Invariant
/// - The inner string is non-empty after trimming.
/// - Equality, hash, and ordering all derive from the inner string, so the
///   three contracts agree by construction.
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Creates a `Name`, rejecting empty or all-whitespace input.
    pub fn new(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(NameError::Empty);
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Error type for name validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// The supplied name was empty or contained only whitespace.
    Empty,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty or all whitespace"),
        }
    }
}

impl std::error::Error for NameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(Name::new(""), Err(NameError::Empty));
        assert_eq!(Name::new("   "), Err(NameError::Empty));
        assert_eq!(Name::new("\t\n"), Err(NameError::Empty));
    }

    #[test]
    fn preserves_input_verbatim() {
        let name = Name::new(" Zia ").unwrap();
        // Validation trims for the emptiness check only; the value is kept as given.
        assert_eq!(name.as_str(), " Zia ");
    }

    #[test]
    fn orders_lexicographically() {
        let alex = Name::new("Alex").unwrap();
        let bob = Name::new("Bob").unwrap();
        let zia = Name::new("Zia").unwrap();
        assert!(alex < bob);
        assert!(bob < zia);
        assert_eq!(alex.cmp(&alex), std::cmp::Ordering::Equal);
    }
}
