//! Walkthrough of the crate's containers and contracts.
//!
//! Runs a fixed sequence of demonstration calls and prints human-readable
//! text. The exact text is illustrative, not a compatibility contract.
//!
//! Run with: `cargo run --example tour`

use roster::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hash roster: deduplication by name ===");
    hash_roster_dedup()?;

    println!("\n=== Sorted roster: ascending iteration and navigation ===");
    sorted_roster_navigation()?;

    println!("\n=== Keyed roster: last-write-wins puts ===");
    keyed_roster_overwrite();

    println!("\n=== Comparator sorting: by age, then name ===");
    comparator_sorting()?;

    Ok(())
}

fn hash_roster_dedup() -> Result<(), NameError> {
    let mut people: Roster<Member> = Roster::new();
    people.add(Member::new("Zia", 22, "Female")?);
    people.add(Member::new("Zia", 22, "Female")?); // duplicate name
    people.add(Member::new("Alex", 24, "Male")?);
    people.add(Member::new("Zia", 30, "Female")?); // same name, different age

    println!("Members (duplicates by name removed):");
    for person in &people {
        println!("  {person}");
    }
    println!("Roster size: {}", people.len());
    Ok(())
}

fn sorted_roster_navigation() -> Result<(), Box<dyn std::error::Error>> {
    let mut people: SortedRoster<Member> = SortedRoster::new();
    people.add(Member::new("Zia", 22, "Female")?);
    people.add(Member::new("Rome", 23, "Male")?);
    people.add(Member::new("Alex", 24, "Male")?);
    people.add(Member::new("Lucy", 21, "Female")?);
    people.add(Member::new("Bob", 25, "Male")?);

    println!("Sorted roster (ascending by name):");
    for person in &people {
        println!("  {person}");
    }

    println!("First member: {}", people.first()?);
    println!("Last member:  {}", people.last()?);

    let probe = Member::new("Lucy", 0, "")?;
    match people.higher(&probe) {
        Some(person) => println!("Higher than 'Lucy': {person}"),
        None => println!("Higher than 'Lucy': none"),
    }
    match people.lower(&probe) {
        Some(person) => println!("Lower than 'Lucy':  {person}"),
        None => println!("Lower than 'Lucy':  none"),
    }

    // Endpoint queries on an empty roster report the error explicitly.
    let empty: SortedRoster<Member> = SortedRoster::new();
    if let Err(e) = empty.first() {
        println!("first() on an empty roster: {e}");
    }
    Ok(())
}

fn keyed_roster_overwrite() {
    let mut countries: KeyedRoster<&str, &str> = KeyedRoster::new();
    countries.put("IN", "India");
    countries.put("US", "United States");
    countries.put("CN", "China");

    println!("Country with code 'IN': {:?}", countries.get(&"IN"));

    // A duplicate key overwrites and hands back the previous value.
    let previous = countries.put("CN", "People's Republic of China");
    println!("Previous value for 'CN': {previous:?}");
    println!("Current value for 'CN':  {:?}", countries.get(&"CN"));
    println!("Size: {}", countries.len());
}

fn comparator_sorting() -> Result<(), NameError> {
    let mut people = vec![
        Member::new("Alex", 25, "Male")?,
        Member::new("Zara", 22, "Female")?,
        Member::new("Morgan", 25, "Male")?, // same age as Alex
    ];
    sort_members(&mut people, by_age_then_name);

    println!("Sorted by age, then by name:");
    for person in &people {
        println!("  {person}");
    }
    Ok(())
}
