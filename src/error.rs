//! Validation failure reasons for the payment form.
//!
//! Each variant carries the exact message shown under the failing input,
//! and knows which logical field it belongs to and which physical input
//! receives the visual error marker.

use crate::state::{Field, InputId};
use std::fmt;

/// Reasons a form field can fail validation.
///
/// `Display` produces the user-facing message verbatim, so the UI layer can
/// render errors without any mapping of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldError {
    /// The cardholder name is empty or whitespace.
    NameEmpty,

    /// The card number is empty after stripping whitespace.
    NumberEmpty,

    /// The card number is not exactly 16 ASCII digits.
    NumberFormat,

    /// The expiry month or year input is blank.
    ExpiryBlank,

    /// The expiry month does not parse as an integer in 1-12.
    InvalidMonth,

    /// The expiry year does not parse, or the date is in the past.
    InvalidYear,

    /// The CVC is empty or whitespace.
    CvcEmpty,

    /// The CVC is not exactly 3 or 4 ASCII digits.
    CvcFormat,
}

impl FieldError {
    /// Returns the logical field this error belongs to.
    #[inline]
    pub const fn field(&self) -> Field {
        match self {
            Self::NameEmpty => Field::Name,
            Self::NumberEmpty | Self::NumberFormat => Field::CardNumber,
            Self::ExpiryBlank | Self::InvalidMonth | Self::InvalidYear => Field::Expiry,
            Self::CvcEmpty | Self::CvcFormat => Field::Cvc,
        }
    }

    /// Returns the physical input that receives the error marker.
    ///
    /// The expiry field shares one message slot between two inputs: blank
    /// and invalid-month errors mark the month input, while an invalid or
    /// expired year marks the year input.
    #[inline]
    pub const fn input(&self) -> InputId {
        match self {
            Self::NameEmpty => InputId::Name,
            Self::NumberEmpty | Self::NumberFormat => InputId::Number,
            Self::ExpiryBlank | Self::InvalidMonth => InputId::Month,
            Self::InvalidYear => InputId::Year,
            Self::CvcEmpty | Self::CvcFormat => InputId::Cvc,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameEmpty => write!(f, "Cardholder name cannot be empty"),
            Self::NumberEmpty => write!(f, "Card number cannot be empty"),
            Self::NumberFormat => write!(f, "Wrong format, 16 digits required"),
            Self::ExpiryBlank => write!(f, "Can't be blank"),
            Self::InvalidMonth => write!(f, "Invalid month"),
            Self::InvalidYear => write!(f, "Invalid year or expired"),
            Self::CvcEmpty => write!(f, "CVC cannot be empty"),
            Self::CvcFormat => write!(f, "Wrong format"),
        }
    }
}

impl std::error::Error for FieldError {}
