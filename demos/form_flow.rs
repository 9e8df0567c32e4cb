//! Full keystroke/submit/continue session example.
//!
//! Run with: `cargo run --example form_flow`

use card_form::{CardInputState, CurrentDate, Field, PaymentForm, View};

fn main() {
    println!("=== Payment Form Session ===\n");

    let mut form = PaymentForm::new();
    let today = CurrentDate::now();

    // Initial preview contents
    println!("Initial preview:");
    for update in form.reset() {
        println!("  {}: {}", update.field(), update.display());
    }
    println!();

    // The user types a card number; the input gets the grouped value back
    let state = CardInputState::new("", "4111111111111111", "", "", "");
    let update = form.field_changed(&state, Field::CardNumber);
    println!("After typing the number:");
    println!("  preview:    {}", update.display());
    println!("  write-back: {:?}", update.write_back());
    println!();

    // First submit fails: everything else is still blank
    let verdict = form.submit(&state, &today);
    println!("First submit (view: {:?}):", form.view());
    for field in verdict.verdicts() {
        if let Some(message) = field.message() {
            println!("  {}: {}", field.field(), message);
        }
    }
    println!();

    // Filling the rest and resubmitting succeeds
    let state = CardInputState::new("Jane Appleseed", "4111 1111 1111 1111", "09", "99", "123");
    let verdict = form.submit(&state, &today);
    println!(
        "Second submit: all valid = {}, view = {:?}",
        verdict.all_valid(),
        form.view()
    );
    assert_eq!(form.view(), View::Success);
    println!();

    // Continue returns to a pristine form
    println!("After continue:");
    for update in form.reset() {
        println!("  {}: {}", update.field(), update.display());
    }
    println!("view = {:?}", form.view());
}
