//! # card_form
//!
//! Payment form validation and card preview formatting for Rust. Work in progress.
//!
//! ## Features
//!
//! - Live card preview formatting (uppercased name, grouped number, `MM/YY`, CVC)
//! - Submit-time validation with exact user-facing messages per field
//! - Form/success view handling with explicit reset
//! - UI-agnostic: snapshots in, display strings and verdicts out
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{validate_form, CardInputState, CurrentDate};
//!
//! let today = CurrentDate::new(4, 2026).unwrap();
//! let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
//!
//! let verdict = validate_form(&state, &today);
//! assert!(verdict.all_valid());
//!
//! // Safe for logging - card number and CVC are masked
//! println!("submitted: {:?}", state);
//! ```
//!
//! ## Preview Formatting
//!
//! ```rust
//! use card_form::format;
//!
//! assert_eq!(format::format_cardholder_name("jane doe"), "JANE DOE");
//! assert_eq!(format::format_cardholder_name(""), "JANE APPLESEED");
//!
//! let number = format::format_card_number("4111111111111111");
//! assert_eq!(number.display, "4111 1111 1111 1111");
//!
//! assert_eq!(format::format_expiry("4", "25"), "04/25");
//! assert_eq!(format::format_cvc(""), "000");
//! ```
//!
//! ## Validation Messages
//!
//! ```rust
//! use card_form::{validate_form, CardInputState, CurrentDate, Field};
//!
//! let today = CurrentDate::new(4, 2026).unwrap();
//! let state = CardInputState::new("Jane Doe", "123", "13", "30", "12");
//!
//! let verdict = validate_form(&state, &today);
//! assert_eq!(
//!     verdict.verdict(Field::CardNumber).message().as_deref(),
//!     Some("Wrong format, 16 digits required")
//! );
//! assert_eq!(
//!     verdict.verdict(Field::Expiry).message().as_deref(),
//!     Some("Invalid month")
//! );
//! ```
//!
//! ## Form Session
//!
//! ```rust
//! use card_form::{CardInputState, CurrentDate, Field, PaymentForm, View};
//!
//! let mut form = PaymentForm::new();
//! let today = CurrentDate::new(4, 2026).unwrap();
//!
//! // Keystroke: format the number, write the grouped value back.
//! let state = CardInputState::new("", "4111111111111111", "", "", "");
//! let update = form.field_changed(&state, Field::CardNumber);
//! assert_eq!(update.write_back(), Some("4111 1111 1111 1111"));
//!
//! // Submit, then continue back to an empty form.
//! let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
//! assert!(form.submit(&state, &today).all_valid());
//! assert_eq!(form.view(), View::Success);
//! form.reset();
//! assert_eq!(form.view(), View::Form);
//! ```
//!
//! ## Validation Rules
//!
//! | Field | Valid iff | Message when invalid |
//! |-------|-----------|----------------------|
//! | Name | trimmed value non-empty | "Cardholder name cannot be empty" |
//! | Card number | 16 ASCII digits after stripping whitespace | "Card number cannot be empty" / "Wrong format, 16 digits required" |
//! | Expiry | month 1-12, year at or after the current two-digit year | "Can't be blank" / "Invalid month" / "Invalid year or expired" |
//! | CVC | 3 or 4 ASCII digits | "CVC cannot be empty" / "Wrong format" |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | `cardform` command-line tool |
//! | `serde` | Serializable verdicts and field enums |
//!
//! ## Security
//!
//! - Card number and CVC are zeroized when a snapshot is dropped
//! - `Debug` output masks both, so snapshots can be logged safely
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod state;
pub mod validate;

// Re-export main types at crate root
pub use error::FieldError;
pub use expiry::CurrentDate;
pub use form::{FieldUpdate, PaymentForm, View};
pub use state::{CardInputState, Field, InputId};
pub use validate::{is_valid, validate_form, FieldVerdict, FormVerdict};
