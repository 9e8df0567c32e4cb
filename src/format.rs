//! Display formatting for the live card preview.
//!
//! Every function here is total: raw input in, best-effort display text
//! out. Nothing is rejected and nothing can fail; bad input is simply
//! carried through and left for submit-time validation.
//!
//! # Preview Conventions
//!
//! - **Name**: uppercased as typed, `JANE APPLESEED` while empty
//! - **Number**: digits grouped in fours, `0000 0000 0000 0000` while empty
//! - **Expiry**: each part zero-padded to two digits, joined as `MM/YY`
//! - **CVC**: shown verbatim, `000` while empty
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_card_number, format_expiry};
//!
//! let number = format_card_number("4111111111111111");
//! assert_eq!(number.display, "4111 1111 1111 1111");
//!
//! assert_eq!(format_expiry("4", "25"), "04/25");
//! ```

/// Preview text shown while the cardholder name is empty.
pub const NAME_PLACEHOLDER: &str = "JANE APPLESEED";

/// Preview text shown while the card number is empty.
pub const NUMBER_PLACEHOLDER: &str = "0000 0000 0000 0000";

/// Preview text shown while both expiry inputs are empty.
pub const EXPIRY_PLACEHOLDER: &str = "00/00";

/// Preview text shown while the CVC is empty.
pub const CVC_PLACEHOLDER: &str = "000";

/// Formatted card number: what the preview shows and what the input keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNumberFormat {
    /// Grouped digits for the preview, or the placeholder when empty.
    pub display: String,
    /// Grouped digits to write back into the input; empty stays empty.
    pub value: String,
}

/// Formats the cardholder name for the card preview.
///
/// The name is uppercased but otherwise untouched; the stored input value
/// is never rewritten. Only a truly empty input shows the placeholder, so
/// a whitespace-only name is previewed as typed.
///
/// # Example
///
/// ```
/// use card_form::format::{format_cardholder_name, NAME_PLACEHOLDER};
///
/// assert_eq!(format_cardholder_name("Jane Doe"), "JANE DOE");
/// assert_eq!(format_cardholder_name(""), NAME_PLACEHOLDER);
/// ```
pub fn format_cardholder_name(input: &str) -> String {
    if input.is_empty() {
        NAME_PLACEHOLDER.to_string()
    } else {
        input.to_uppercase()
    }
}

/// Formats the card number for the preview and the input write-back.
///
/// Strips every non-digit, then inserts a space after each run of four
/// digits when at least one more digit follows. No length cap is applied
/// here; the 16-digit rule is enforced at submit time.
///
/// # Example
///
/// ```
/// use card_form::format::format_card_number;
///
/// let f = format_card_number("4111-1111-1111-1111");
/// assert_eq!(f.display, "4111 1111 1111 1111");
/// assert_eq!(f.value, "4111 1111 1111 1111");
///
/// // The preview falls back to the placeholder, the input does not.
/// let f = format_card_number("");
/// assert_eq!(f.display, "0000 0000 0000 0000");
/// assert_eq!(f.value, "");
/// ```
pub fn format_card_number(input: &str) -> CardNumberFormat {
    let value = group_digits(input);
    let display = if value.is_empty() {
        NUMBER_PLACEHOLDER.to_string()
    } else {
        value.clone()
    };

    CardNumberFormat { display, value }
}

/// Strips non-digits and groups the remainder in fours.
///
/// A space is inserted only between groups, never at the end, so a partial
/// final group stays bare. Running the output back through produces the
/// same string.
///
/// # Example
///
/// ```
/// use card_form::format::group_digits;
///
/// assert_eq!(group_digits("41111"), "4111 1");
/// assert_eq!(group_digits("4111 1"), "4111 1");
/// assert_eq!(group_digits("no digits"), "");
/// ```
pub fn group_digits(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::with_capacity(digits.len() + digits.len() / 4);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            result.push(' ');
        }
        result.push(*c);
    }

    result
}

/// Formats the expiry inputs as `MM/YY` for the card preview.
///
/// Each part is left-padded to two characters with `'0'` and never
/// truncated, so a four-digit year passes through whole. Padding an empty
/// part yields `"00"`, which is why two blank inputs render exactly the
/// `00/00` placeholder with no separate fallback.
///
/// # Example
///
/// ```
/// use card_form::format::format_expiry;
///
/// assert_eq!(format_expiry("4", "25"), "04/25");
/// assert_eq!(format_expiry("12", "2025"), "12/2025");
/// assert_eq!(format_expiry("", ""), "00/00");
/// ```
pub fn format_expiry(month: &str, year: &str) -> String {
    format!("{:0>2}/{:0>2}", month, year)
}

/// Formats the CVC for the card preview.
///
/// The value is previewed verbatim; only an empty input shows the
/// placeholder.
///
/// # Example
///
/// ```
/// use card_form::format::{format_cvc, CVC_PLACEHOLDER};
///
/// assert_eq!(format_cvc("123"), "123");
/// assert_eq!(format_cvc(""), CVC_PLACEHOLDER);
/// ```
pub fn format_cvc(input: &str) -> String {
    if input.is_empty() {
        CVC_PLACEHOLDER.to_string()
    } else {
        input.to_string()
    }
}
