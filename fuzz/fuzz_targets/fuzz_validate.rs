//! Fuzz target for whole-form validation.
//!
//! Tests that the validator never panics and always produces a complete
//! verdict for arbitrary field combinations.

#![no_main]

use card_form::{validate_form, CardInputState, CurrentDate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str, &str, &str, &str, u8, u16)| {
    let (name, number, month, year, cvc, ref_month, ref_year) = data;

    let Some(today) = CurrentDate::new(ref_month, ref_year) else {
        return;
    };

    let state = CardInputState::new(name, number, month, year, cvc);
    let verdict = validate_form(&state, &today);

    // One verdict per logical field, every invalid one carrying a message
    assert_eq!(verdict.verdicts().len(), 4);
    for field in verdict.verdicts() {
        assert_eq!(field.is_valid(), field.message().is_none());
    }
    assert_eq!(verdict.all_valid(), verdict.errors().count() == 0);
});
