//! Fuzz target for preview formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use card_form::format;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_cardholder_name(data);
    let _ = format::format_card_number(data);
    let _ = format::group_digits(data);
    let _ = format::format_expiry(data, data);
    let _ = format::format_cvc(data);

    // Verify grouping stability
    let grouped = format::group_digits(data);
    assert_eq!(
        format::group_digits(&grouped),
        grouped,
        "Grouping should be idempotent on its own output"
    );
    assert!(!grouped.ends_with(' '), "No trailing space after grouping");

    // The write-back value and the display agree whenever digits exist
    let formatted = format::format_card_number(data);
    if !formatted.value.is_empty() {
        assert_eq!(formatted.display, formatted.value);
    }
});
