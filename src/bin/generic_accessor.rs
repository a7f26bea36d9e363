//! Pattern 1: Type-Safe Generic Accessors
//!
//! Run with: cargo run --bin generic_accessor

use colored::Colorize;
use feature_tour::accessor::{describe, get_property, lens, Age, Book, Name, Pages, Person, Title};
use feature_tour::{logging, TourConfig, TourError};

fn main() -> Result<(), TourError> {
    let config = TourConfig::load()?;
    logging::init(&config.log_filter);

    println!("{}", "=== Generic Property Accessor ===".bold());
    let alice = Person::new("Alice", 30);

    // Usage: the key picks both the field and the result type.
    let name: &String = get_property(&alice, Name);
    let age: &u32 = get_property(&alice, Age);
    println!("get_property(alice, Name) = {:?}", name);
    println!("get_property(alice, Age)  = {}", age);

    println!("\n{}", "=== Same Accessor, Different Record ===".bold());
    let book = Book::new("The Rust Programming Language", 560);
    println!("{}", describe(&book, Title));
    println!("{}", describe(&book, Pages));

    println!("\n{}", "=== Lens Over a Collection ===".bold());
    let people = vec![alice, Person::new("Bob", 41), Person::new("Carol", 27)];
    let age_lens = lens::<Person, Age>();
    let total: u32 = people.iter().map(|p| *age_lens.view(p)).sum();
    println!("sum of '{}' over {} people = {}", age_lens.name(), people.len(), total);

    println!("\n{}", "✓ Unknown keys are rejected at compile time".green());
    Ok(())
}
