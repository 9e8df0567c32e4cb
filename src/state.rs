//! Core input types for the payment form.
//!
//! This module provides the `Field` and `InputId` enums that identify the
//! form's logical fields and physical inputs, and the `CardInputState`
//! snapshot that carries raw user input into the formatter and validator.

use std::fmt;
use zeroize::Zeroize;

/// Logical fields of the payment form, in validation order.
///
/// `Expiry` is one logical field backed by two physical inputs (month and
/// year) that share a single message slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    /// Cardholder name as printed on the card.
    Name,
    /// Card number, stored space-grouped after formatting.
    CardNumber,
    /// Expiry month and year, previewed as `MM/YY`.
    Expiry,
    /// Card verification code (3 or 4 digits).
    Cvc,
}

impl Field {
    /// All fields in validation order: Name, CardNumber, Expiry, Cvc.
    pub const ALL: [Field; 4] = [Field::Name, Field::CardNumber, Field::Expiry, Field::Cvc];

    /// Returns the physical inputs backing this logical field.
    ///
    /// Editing any of them updates the field's preview region and clears
    /// the field's error state.
    #[inline]
    pub const fn inputs(&self) -> &'static [InputId] {
        match self {
            Self::Name => &[InputId::Name],
            Self::CardNumber => &[InputId::Number],
            Self::Expiry => &[InputId::Month, InputId::Year],
            Self::Cvc => &[InputId::Cvc],
        }
    }

    /// Returns a human-readable name for the field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Name => "cardholder name",
            Self::CardNumber => "card number",
            Self::Expiry => "expiry date",
            Self::Cvc => "CVC",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Physical inputs of the form.
///
/// These identify where the UI layer places error markers; the core never
/// touches the inputs itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InputId {
    /// The cardholder name input.
    Name,
    /// The card number input.
    Number,
    /// The expiry month input.
    Month,
    /// The expiry year input.
    Year,
    /// The CVC input.
    Cvc,
}

impl InputId {
    /// All physical inputs in form order.
    pub const ALL: [InputId; 5] = [
        InputId::Name,
        InputId::Number,
        InputId::Month,
        InputId::Year,
        InputId::Cvc,
    ];
}

/// A snapshot of the five raw input values.
///
/// Values are carried exactly as typed; nothing is trimmed or normalized
/// here. The formatter and validator apply their own normalization where
/// their rules call for it.
///
/// # Security
///
/// The card number and CVC are zeroed when the snapshot is dropped, and
/// `Debug` output masks both so a snapshot can be logged safely.
#[derive(Clone, Default)]
pub struct CardInputState {
    /// Raw cardholder name input.
    pub cardholder_name: String,
    /// Raw card number input (space-grouped once formatting has run).
    pub card_number: String,
    /// Raw expiry month input.
    pub exp_month: String,
    /// Raw expiry year input.
    pub exp_year: String,
    /// Raw CVC input.
    pub cvc: String,
}

impl CardInputState {
    /// Creates a snapshot from the five input values.
    pub fn new(
        cardholder_name: impl Into<String>,
        card_number: impl Into<String>,
        exp_month: impl Into<String>,
        exp_year: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            cardholder_name: cardholder_name.into(),
            card_number: card_number.into(),
            exp_month: exp_month.into(),
            exp_year: exp_year.into(),
            cvc: cvc.into(),
        }
    }
}

impl fmt::Debug for CardInputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInputState")
            .field("cardholder_name", &self.cardholder_name)
            .field("card_number", &mask_digits(&self.card_number))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("cvc", &"***")
            .finish()
    }
}

impl Drop for CardInputState {
    fn drop(&mut self) {
        self.card_number.zeroize();
        self.cvc.zeroize();
    }
}

/// Masks all but the last four digits of a value for display.
fn mask_digits(value: &str) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    let masked = digits.len().saturating_sub(4);
    let mut result = String::with_capacity(digits.len());
    for (i, c) in digits.iter().enumerate() {
        if i < masked {
            result.push('*');
        } else {
            result.push(*c);
        }
    }
    result
}
