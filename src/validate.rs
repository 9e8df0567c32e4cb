//! Submit-time validation for the payment form.
//!
//! This module classifies a [`CardInputState`] snapshot into one verdict
//! per logical field. Validation is a pure, single-pass check: it never
//! fails, never stops early, and always returns a complete [`FormVerdict`]
//! so the UI can show every applicable message at once.
//!
//! Each field validates independently; the only joint rule is the expiry
//! month/year pair, which is checked against an injected [`CurrentDate`].
//!
//! # Example
//!
//! ```
//! use card_form::{validate_form, CardInputState, CurrentDate, FieldError};
//!
//! let today = CurrentDate::new(4, 2026).unwrap();
//!
//! let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
//! assert!(validate_form(&state, &today).all_valid());
//!
//! let state = CardInputState::new("Jane Doe", "123", "09", "30", "123");
//! let verdict = validate_form(&state, &today);
//! assert!(!verdict.all_valid());
//! assert_eq!(
//!     verdict.errors().next(),
//!     Some(&FieldError::NumberFormat)
//! );
//! ```

use crate::error::FieldError;
use crate::expiry::{self, CurrentDate};
use crate::state::{CardInputState, Field};

/// The outcome of validating one logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldVerdict {
    field: Field,
    error: Option<FieldError>,
}

impl FieldVerdict {
    /// Returns the field this verdict is for.
    #[inline]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns true if the field passed validation.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the failure reason, if the field failed.
    #[inline]
    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Returns the user-facing message, if the field failed.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// The outcome of validating the whole form.
///
/// Verdicts are ordered Name, CardNumber, Expiry, Cvc and there is exactly
/// one per logical field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormVerdict {
    verdicts: [FieldVerdict; 4],
}

impl FormVerdict {
    /// Returns true if every field passed.
    pub fn all_valid(&self) -> bool {
        self.verdicts.iter().all(FieldVerdict::is_valid)
    }

    /// Returns the verdicts in validation order.
    pub fn verdicts(&self) -> &[FieldVerdict] {
        &self.verdicts
    }

    /// Returns the verdict for one field.
    pub fn verdict(&self, field: Field) -> &FieldVerdict {
        // Field::ALL and the verdict array share their ordering.
        &self.verdicts[field as usize]
    }

    /// Iterates over the failure reasons, in validation order.
    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.verdicts.iter().filter_map(FieldVerdict::error)
    }
}

/// Validates the cardholder name.
///
/// The trimmed value must be non-empty.
pub fn validate_name(input: &str) -> Result<(), FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::NameEmpty);
    }
    Ok(())
}

/// Validates the card number.
///
/// Reads the stored value, which is already space-grouped once formatting
/// has run: whitespace is stripped and the rest must be exactly 16 ASCII
/// digits.
///
/// # Example
///
/// ```
/// use card_form::validate::validate_card_number;
/// use card_form::FieldError;
///
/// assert!(validate_card_number("4111 1111 1111 1111").is_ok());
/// assert_eq!(validate_card_number("123"), Err(FieldError::NumberFormat));
/// assert_eq!(validate_card_number(""), Err(FieldError::NumberEmpty));
/// ```
pub fn validate_card_number(input: &str) -> Result<(), FieldError> {
    let value: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    if value.is_empty() {
        return Err(FieldError::NumberEmpty);
    }
    if value.len() != 16 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NumberFormat);
    }
    Ok(())
}

/// Validates the expiry month/year pair against a reference date.
///
/// Checks run in priority order: blank inputs first, then the month range,
/// then the year. Both parts parse as integers, so `"05"` and `"5"` are
/// the same month. The year comparison is two-digit with no truncation of
/// longer values.
///
/// # Example
///
/// ```
/// use card_form::validate::validate_expiry;
/// use card_form::{CurrentDate, FieldError};
///
/// let today = CurrentDate::new(4, 2026).unwrap();
///
/// assert!(validate_expiry("09", "30", &today).is_ok());
/// assert_eq!(validate_expiry("13", "30", &today), Err(FieldError::InvalidMonth));
/// assert_eq!(validate_expiry("03", "26", &today), Err(FieldError::InvalidYear));
/// ```
pub fn validate_expiry(month: &str, year: &str, today: &CurrentDate) -> Result<(), FieldError> {
    if month.trim().is_empty() || year.trim().is_empty() {
        return Err(FieldError::ExpiryBlank);
    }

    let month: i32 = match month.trim().parse() {
        Ok(m) if (1..=12).contains(&m) => m,
        _ => return Err(FieldError::InvalidMonth),
    };

    let year: i32 = match year.trim().parse() {
        Ok(y) => y,
        Err(_) => return Err(FieldError::InvalidYear),
    };

    if expiry::is_expired(month, year, today) {
        return Err(FieldError::InvalidYear);
    }
    Ok(())
}

/// Validates the CVC.
///
/// The trimmed value must be non-empty, and the raw value must then be
/// exactly 3 or 4 ASCII digits; surrounding whitespace is a format error,
/// not ignored.
pub fn validate_cvc(input: &str) -> Result<(), FieldError> {
    if input.trim().is_empty() {
        return Err(FieldError::CvcEmpty);
    }
    if !(3..=4).contains(&input.len()) || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::CvcFormat);
    }
    Ok(())
}

/// Validates the whole form against a reference date.
///
/// Always evaluates all four fields and returns a complete [`FormVerdict`];
/// no failure short-circuits the rest.
pub fn validate_form(state: &CardInputState, today: &CurrentDate) -> FormVerdict {
    FormVerdict {
        verdicts: [
            FieldVerdict {
                field: Field::Name,
                error: validate_name(&state.cardholder_name).err(),
            },
            FieldVerdict {
                field: Field::CardNumber,
                error: validate_card_number(&state.card_number).err(),
            },
            FieldVerdict {
                field: Field::Expiry,
                error: validate_expiry(&state.exp_month, &state.exp_year, today).err(),
            },
            FieldVerdict {
                field: Field::Cvc,
                error: validate_cvc(&state.cvc).err(),
            },
        ],
    }
}

/// Quickly checks whether the whole form is valid.
///
/// # Example
///
/// ```
/// use card_form::{is_valid, CardInputState, CurrentDate};
///
/// let today = CurrentDate::new(4, 2026).unwrap();
/// let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
/// assert!(is_valid(&state, &today));
/// ```
#[inline]
pub fn is_valid(state: &CardInputState, today: &CurrentDate) -> bool {
    validate_form(state, today).all_valid()
}
