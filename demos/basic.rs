//! Basic form validation example.
//!
//! Run with: `cargo run --example basic`

use card_form::{validate_form, CardInputState, CurrentDate};

fn main() {
    println!("=== Basic Payment Form Validation ===\n");

    let today = CurrentDate::now();

    // Example 1: a fully valid form
    let state = CardInputState::new("Jane Appleseed", "4111 1111 1111 1111", "09", "99", "123");
    println!("Validating: {:?}", state);

    let verdict = validate_form(&state, &today);
    println!("  All valid: {}", verdict.all_valid());
    println!();

    // Example 2: several problems at once
    let state = CardInputState::new("", "4111 1111", "13", "99", "12");
    println!("Validating: {:?}", state);

    let verdict = validate_form(&state, &today);
    for field in verdict.verdicts() {
        match field.message() {
            None => println!("  {}: ok", field.field()),
            Some(message) => println!("  {}: {}", field.field(), message),
        }
    }
    println!();

    // Example 3: error markers name the input to highlight
    println!("Error markers:");
    for error in verdict.errors() {
        println!("  {:?} input gets: \"{}\"", error.input(), error);
    }
}
