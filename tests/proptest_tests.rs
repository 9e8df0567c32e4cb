//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_form::{
    format::{format_card_number, format_cardholder_name, format_cvc, format_expiry, group_digits},
    validate::{validate_card_number, validate_cvc, validate_expiry, validate_name},
    validate_form, CardInputState, CurrentDate,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a digit string of the given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates an arbitrary reference date.
fn current_date() -> impl Strategy<Value = CurrentDate> {
    (1u8..=12, 2024u16..=2099)
        .prop_map(|(month, year)| CurrentDate::new(month, year).unwrap())
}

// =============================================================================
// GROUPING PROPERTIES
// =============================================================================

proptest! {
    /// Property: n digits produce exactly ceil(n/4) - 1 spaces.
    #[test]
    fn grouping_space_count(digits in digit_string_range(1..=30)) {
        let grouped = group_digits(&digits);
        let expected_spaces = digits.len().div_ceil(4) - 1;
        let spaces = grouped.chars().filter(|&c| c == ' ').count();
        prop_assert_eq!(spaces, expected_spaces);
    }

    /// Property: grouped output never starts or ends with a space.
    #[test]
    fn grouping_no_edge_spaces(input in ".*") {
        let grouped = group_digits(&input);
        prop_assert!(!grouped.starts_with(' '));
        prop_assert!(!grouped.ends_with(' '));
    }

    /// Property: grouping is idempotent on its own output.
    #[test]
    fn grouping_idempotent(input in ".*") {
        let once = group_digits(&input);
        prop_assert_eq!(group_digits(&once), once);
    }

    /// Property: grouping preserves the digit sequence exactly.
    #[test]
    fn grouping_preserves_digits(input in ".*") {
        let grouped = group_digits(&input);
        let before: String = input.chars().filter(char::is_ascii_digit).collect();
        let after: String = grouped.chars().filter(char::is_ascii_digit).collect();
        prop_assert_eq!(before, after);
    }

    /// Property: the write-back value always matches the display unless empty.
    #[test]
    fn number_display_is_value_or_placeholder(input in ".*") {
        let f = format_card_number(&input);
        if f.value.is_empty() {
            prop_assert_eq!(f.display.as_str(), "0000 0000 0000 0000");
        } else {
            prop_assert_eq!(&f.display, &f.value);
        }
    }
}

// =============================================================================
// EXPIRY FORMAT PROPERTIES
// =============================================================================

proptest! {
    /// Property: real month/year pairs render zero-padded and 5 wide.
    #[test]
    fn expiry_format_padded(month in 1u8..=12, year in 0u8..=99) {
        let rendered = format_expiry(&month.to_string(), &year.to_string());
        prop_assert_eq!(rendered.len(), 5);
        prop_assert_eq!(rendered.chars().nth(2), Some('/'));
        prop_assert_eq!(rendered, format!("{:02}/{:02}", month, year));
    }

    /// Property: parts two characters or longer pass through whole.
    #[test]
    fn expiry_format_never_truncates(month in digit_string_range(2..=4), year in digit_string_range(2..=4)) {
        let rendered = format_expiry(&month, &year);
        prop_assert_eq!(rendered, format!("{}/{}", month, year));
    }
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: any 16-digit string passes, grouped or not.
    #[test]
    fn sixteen_digits_always_pass(digits in digit_string(16)) {
        prop_assert!(validate_card_number(&digits).is_ok());
        prop_assert!(validate_card_number(&group_digits(&digits)).is_ok());
    }

    /// Property: any other digit count fails.
    #[test]
    fn wrong_digit_count_always_fails(digits in digit_string_range(1..=30)) {
        prop_assume!(digits.len() != 16);
        prop_assert!(validate_card_number(&digits).is_err());
    }

    /// Property: 3- and 4-digit CVCs pass, everything else fails.
    #[test]
    fn cvc_length_rule(digits in digit_string_range(1..=8)) {
        let result = validate_cvc(&digits);
        prop_assert_eq!(result.is_ok(), digits.len() == 3 || digits.len() == 4);
    }

    /// Property: padded and bare representations validate identically.
    #[test]
    fn expiry_padding_is_irrelevant(
        month in 1u8..=9,
        year in 1u8..=9,
        today in current_date(),
    ) {
        let bare = validate_expiry(&month.to_string(), &year.to_string(), &today);
        let padded = validate_expiry(&format!("0{}", month), &format!("0{}", year), &today);
        prop_assert_eq!(bare, padded);
    }

    /// Property: a year after the current two-digit year is always valid.
    #[test]
    fn future_year_always_valid(month in 1u8..=12, offset in 1u16..=50, today in current_date()) {
        let year = today.two_digit_year() + offset;
        let result = validate_expiry(&month.to_string(), &year.to_string(), &today);
        prop_assert!(result.is_ok());
    }

    /// Property: a year before the current two-digit year is always invalid.
    #[test]
    fn past_year_always_invalid(month in 1u8..=12, today in current_date()) {
        prop_assume!(today.two_digit_year() > 0);
        let year = today.two_digit_year() - 1;
        let result = validate_expiry(&month.to_string(), &year.to_string(), &today);
        prop_assert!(result.is_err());
    }
}

// =============================================================================
// TOTALITY PROPERTIES
// =============================================================================

proptest! {
    /// Property: the formatter never panics on any input.
    #[test]
    fn formatter_never_panics(input in ".*", month in ".*", year in ".*") {
        let _ = format_cardholder_name(&input);
        let _ = format_card_number(&input);
        let _ = group_digits(&input);
        let _ = format_expiry(&month, &year);
        let _ = format_cvc(&input);
    }

    /// Property: the validator never panics and always yields four verdicts.
    #[test]
    fn validator_never_panics(
        name in ".*",
        number in ".*",
        month in ".*",
        year in ".*",
        cvc in ".*",
        today in current_date(),
    ) {
        let _ = validate_name(&name);
        let _ = validate_card_number(&number);
        let _ = validate_expiry(&month, &year, &today);
        let _ = validate_cvc(&cvc);

        let state = CardInputState::new(name, number, month, year, cvc);
        let verdict = validate_form(&state, &today);
        prop_assert_eq!(verdict.verdicts().len(), 4);
    }

    /// Property: a verdict is valid exactly when it carries no message.
    #[test]
    fn message_iff_invalid(
        name in ".*",
        number in ".*",
        cvc in ".*",
        today in current_date(),
    ) {
        let state = CardInputState::new(name, number, "09", "99", cvc);
        for field in validate_form(&state, &today).verdicts() {
            prop_assert_eq!(field.is_valid(), field.message().is_none());
        }
    }
}
