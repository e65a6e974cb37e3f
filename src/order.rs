//! Comparators outside the type's own ordering contract.
//!
//! `Member`'s `Ord` impl fixes one ordering (by name). Sorting a slice by
//! anything else takes an explicit comparator; this module provides the
//! common ones as free functions so they compose with `sort_by`,
//! `max_by`, and friends.

use crate::member::Member;
use std::cmp::Ordering;

/// Compares by name, ascending. Identical to `Member`'s `Ord` impl; provided
/// so name ordering can be passed around as a comparator like any other.
pub fn by_name(a: &Member, b: &Member) -> Ordering {
    a.name().cmp(b.name())
}

/// Compares by age ascending, breaking ties by name ascending.
///
/// This ordering is NOT consistent with `Member`'s equality: it is meant for
/// presentation sorting, never for deduplicating containers.
pub fn by_age_then_name(a: &Member, b: &Member) -> Ordering {
    a.age()
        .cmp(&b.age())
        .then_with(|| a.name().cmp(b.name()))
}

/// Stably sorts a slice of members with the given comparator.
pub fn sort_members<F>(members: &mut [Member], comparator: F)
where
    F: FnMut(&Member, &Member) -> Ordering,
{
    members.sort_by(comparator);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, age: u32, gender: &str) -> Member {
        Member::new(name, age, gender).unwrap()
    }

    #[test]
    fn sorts_by_age_then_name() {
        let mut people = vec![
            member("Alex", 25, "Male"),
            member("Zara", 22, "Female"),
            member("Morgan", 25, "Male"), // same age as Alex
        ];
        sort_members(&mut people, by_age_then_name);
        let names: Vec<&str> = people.iter().map(|m| m.name().as_str()).collect();
        assert_eq!(names, vec!["Zara", "Alex", "Morgan"]);
    }

    #[test]
    fn by_name_matches_the_ord_impl() {
        let a = member("Alex", 25, "Male");
        let z = member("Zara", 22, "Female");
        assert_eq!(by_name(&a, &z), a.cmp(&z));
        assert_eq!(by_name(&z, &a), Ordering::Greater);
    }

    #[test]
    fn by_age_breaks_ties_by_name() {
        let alex = member("Alex", 25, "Male");
        let morgan = member("Morgan", 25, "Male");
        assert_eq!(by_age_then_name(&alex, &morgan), Ordering::Less);
        assert_eq!(by_age_then_name(&alex, &alex), Ordering::Equal);
    }
}
