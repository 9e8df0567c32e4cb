//! The form session: keystroke, submit, and continue entry points.
//!
//! [`PaymentForm`] is the synchronous contract between the UI layer and
//! the core. The UI hands in a [`CardInputState`] snapshot and gets back
//! plain values; the core never touches an input or an error region
//! itself:
//!
//! - [`PaymentForm::field_changed`] on every keystroke returns the
//!   preview text, the optional input write-back, and which inputs' error
//!   state clears.
//! - [`PaymentForm::submit`] returns the full [`FormVerdict`]
//!   and switches to the success view when everything passes.
//! - [`PaymentForm::reset`] on continue restores every placeholder,
//!   clears all errors, and returns to the form view. The same updates
//!   serve as the initial preview contents on startup.
//!
//! # Example
//!
//! ```
//! use card_form::{CardInputState, CurrentDate, Field, PaymentForm, View};
//!
//! let mut form = PaymentForm::new();
//! let today = CurrentDate::new(4, 2026).unwrap();
//!
//! let state = CardInputState::new("jane doe", "41111111111111", "", "", "");
//! let update = form.field_changed(&state, Field::CardNumber);
//! assert_eq!(update.display(), "4111 1111 1111 11");
//! assert_eq!(update.write_back(), Some("4111 1111 1111 11"));
//!
//! let state = CardInputState::new("jane doe", "4111 1111 1111 1111", "09", "30", "123");
//! let verdict = form.submit(&state, &today);
//! assert!(verdict.all_valid());
//! assert_eq!(form.view(), View::Success);
//!
//! form.reset();
//! assert_eq!(form.view(), View::Form);
//! ```

use crate::expiry::CurrentDate;
use crate::format;
use crate::state::{CardInputState, Field, InputId};
use crate::validate::{validate_form, FormVerdict};

/// Which of the two page states is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum View {
    /// The payment form is visible.
    Form,
    /// The success panel is visible.
    Success,
}

/// One preview update for the UI layer to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    field: Field,
    display: String,
    write_back: Option<String>,
}

impl FieldUpdate {
    /// Returns the field whose preview region this update targets.
    #[inline]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns the text to show in the preview region.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the normalized text to write back into the input, if any.
    ///
    /// Only the card number rewrites its input (with the space-grouped
    /// value); every other field leaves the stored text alone.
    pub fn write_back(&self) -> Option<&str> {
        self.write_back.as_deref()
    }

    /// Returns the physical inputs whose error state clears with this
    /// update.
    ///
    /// Any edit clears its field's messages; for the expiry field that
    /// means both the month and year inputs.
    #[inline]
    pub const fn clears(&self) -> &'static [InputId] {
        self.field.inputs()
    }
}

/// The payment form session.
///
/// Holds nothing but the current [`View`]; all field data lives in the
/// UI's inputs and arrives as [`CardInputState`] snapshots. Each call is
/// independent and idempotent for the same input, so a later keystroke
/// simply supersedes an earlier one.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
    view: View,
}

impl Default for View {
    fn default() -> Self {
        View::Form
    }
}

impl PaymentForm {
    /// Creates a session showing the form view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view currently showing.
    #[inline]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Handles one keystroke in any input of the given field.
    ///
    /// Formats the field's current value for the card preview and reports
    /// which inputs' error state clears. The month and year inputs both
    /// map to [`Field::Expiry`]; either one changing refreshes the shared
    /// `MM/YY` region.
    pub fn field_changed(&self, state: &CardInputState, field: Field) -> FieldUpdate {
        match field {
            Field::Name => FieldUpdate {
                field,
                display: format::format_cardholder_name(&state.cardholder_name),
                write_back: None,
            },
            Field::CardNumber => {
                let formatted = format::format_card_number(&state.card_number);
                FieldUpdate {
                    field,
                    display: formatted.display,
                    write_back: Some(formatted.value),
                }
            }
            Field::Expiry => FieldUpdate {
                field,
                display: format::format_expiry(&state.exp_month, &state.exp_year),
                write_back: None,
            },
            Field::Cvc => FieldUpdate {
                field,
                display: format::format_cvc(&state.cvc),
                write_back: None,
            },
        }
    }

    /// Handles a submit attempt.
    ///
    /// Runs the validator over the snapshot and switches to the success
    /// view only when every field passes. The verdict is returned either
    /// way so the UI can render all messages simultaneously.
    pub fn submit(&mut self, state: &CardInputState, today: &CurrentDate) -> FormVerdict {
        let verdict = validate_form(state, today);
        if verdict.all_valid() {
            self.view = View::Success;
        }
        verdict
    }

    /// Handles the continue button: back to an empty form.
    ///
    /// Returns one update per field restoring its literal placeholder.
    /// Every input's error state clears; the UI resets the input values
    /// themselves (the core holds no field data to clear).
    pub fn reset(&mut self) -> Vec<FieldUpdate> {
        self.view = View::Form;

        vec![
            FieldUpdate {
                field: Field::Name,
                display: format::NAME_PLACEHOLDER.to_string(),
                write_back: None,
            },
            FieldUpdate {
                field: Field::CardNumber,
                display: format::NUMBER_PLACEHOLDER.to_string(),
                write_back: None,
            },
            FieldUpdate {
                field: Field::Expiry,
                display: format::EXPIRY_PLACEHOLDER.to_string(),
                write_back: None,
            },
            FieldUpdate {
                field: Field::Cvc,
                display: format::CVC_PLACEHOLDER.to_string(),
                write_back: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> CurrentDate {
        CurrentDate::new(4, 2026).unwrap()
    }

    #[test]
    fn test_starts_on_form_view() {
        assert_eq!(PaymentForm::new().view(), View::Form);
    }

    #[test]
    fn test_name_keystroke() {
        let form = PaymentForm::new();
        let state = CardInputState::new("jane m. doe", "", "", "", "");
        let update = form.field_changed(&state, Field::Name);

        assert_eq!(update.display(), "JANE M. DOE");
        assert_eq!(update.write_back(), None);
        assert_eq!(update.clears(), &[InputId::Name]);
    }

    #[test]
    fn test_number_keystroke_writes_back() {
        let form = PaymentForm::new();
        let state = CardInputState::new("", "4111111", "", "", "");
        let update = form.field_changed(&state, Field::CardNumber);

        assert_eq!(update.display(), "4111 111");
        assert_eq!(update.write_back(), Some("4111 111"));
    }

    #[test]
    fn test_empty_number_keystroke() {
        let form = PaymentForm::new();
        let state = CardInputState::new("", "x", "", "", "");
        let update = form.field_changed(&state, Field::CardNumber);

        // Placeholder in the preview, empty value back into the input.
        assert_eq!(update.display(), format::NUMBER_PLACEHOLDER);
        assert_eq!(update.write_back(), Some(""));
    }

    #[test]
    fn test_expiry_keystroke_clears_both_inputs() {
        let form = PaymentForm::new();
        let state = CardInputState::new("", "", "9", "30", "");
        let update = form.field_changed(&state, Field::Expiry);

        assert_eq!(update.display(), "09/30");
        assert_eq!(update.clears(), &[InputId::Month, InputId::Year]);
    }

    #[test]
    fn test_submit_failure_stays_on_form() {
        let mut form = PaymentForm::new();
        let state = CardInputState::new("", "", "", "", "");
        let verdict = form.submit(&state, &today());

        assert!(!verdict.all_valid());
        assert_eq!(verdict.errors().count(), 4);
        assert_eq!(form.view(), View::Form);
    }

    #[test]
    fn test_submit_success_switches_view() {
        let mut form = PaymentForm::new();
        let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
        let verdict = form.submit(&state, &today());

        assert!(verdict.all_valid());
        assert_eq!(form.view(), View::Success);
    }

    #[test]
    fn test_reset_restores_placeholders() {
        let mut form = PaymentForm::new();
        let state = CardInputState::new("Jane Doe", "4111 1111 1111 1111", "09", "30", "123");
        form.submit(&state, &today());
        assert_eq!(form.view(), View::Success);

        let updates = form.reset();
        assert_eq!(form.view(), View::Form);

        let displays: Vec<_> = updates.iter().map(FieldUpdate::display).collect();
        assert_eq!(
            displays,
            vec!["JANE APPLESEED", "0000 0000 0000 0000", "00/00", "000"]
        );

        let cleared: Vec<_> = updates.iter().flat_map(|u| u.clears()).copied().collect();
        assert_eq!(cleared, InputId::ALL.to_vec());
    }

    #[test]
    fn test_keystroke_is_idempotent() {
        let form = PaymentForm::new();
        let state = CardInputState::new("", "4111 1111 1", "", "", "");
        let first = form.field_changed(&state, Field::CardNumber);

        let replayed = CardInputState::new("", first.write_back().unwrap(), "", "", "");
        let second = form.field_changed(&replayed, Field::CardNumber);
        assert_eq!(first, second);
    }
}
