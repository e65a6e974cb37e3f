//! Roster: membership containers with explicit identity and ordering contracts.
//!
//! This crate models how deduplication and sorted iteration behave when a
//! value's identity is deliberately narrower than its data, providing:
//! - `Member`, an immutable record whose equality, hash, and ordering all
//!   key off the `name` field alone.
//! - `Roster`, a hash-based set: uniqueness by the equality contract,
//!   unspecified iteration order, first-insert-wins duplicates.
//! - `SortedRoster`, an ordered set: uniqueness by the ordering contract,
//!   strictly ascending iteration, endpoint (`first`/`last`) and navigation
//!   (`higher`/`lower`) queries.
//! - `KeyedRoster`/`SortedKeyedRoster`, keyed maps whose duplicate rule is
//!   the dual of the sets': a repeated `put` overwrites and returns the
//!   previous value.
//! - Free-function comparators for orderings that are not the type's own
//!   contract (sort by age, then name).
//!
//! # Contracts
//!
//! The containers assume the usual coherence rules and `Member` upholds
//! them: equality is an equivalence relation, equal values hash identically,
//! and ordering is total and consistent with equality. Containers never hold
//! locks, touch I/O, or share state; they are plain values owned by the
//! caller.
//!
//! # Example
//!
//! ```
//! use roster::prelude::*;
//!
//! let mut seen: Roster<Member> = Roster::new();
//! seen.add(Member::new("Zia", 22, "Female")?);
//! seen.add(Member::new("Zia", 30, "Female")?); // same name: discarded
//! seen.add(Member::new("Alex", 24, "Male")?);
//! assert_eq!(seen.len(), 2);
//!
//! let ranked: SortedRoster<Member> = seen.into_iter().collect();
//! assert_eq!(ranked.first()?.name().as_str(), "Alex");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod keyed;
pub mod member;
pub mod name;
pub mod order;
pub mod roster;
pub mod sorted;

pub use keyed::{KeyedRoster, SortedKeyedRoster};
pub use member::Member;
pub use name::{Name, NameError};
pub use roster::Roster;
pub use sorted::{RosterError, SortedRoster};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::keyed::{KeyedRoster, SortedKeyedRoster};
    pub use crate::member::Member;
    pub use crate::name::{Name, NameError};
    pub use crate::order::{by_age_then_name, by_name, sort_members};
    pub use crate::roster::Roster;
    pub use crate::sorted::{RosterError, SortedRoster};
}
