//! The reclamation intake form.

use serde::Serialize;

use comptoir_core::{EmailAddress, FieldView, FormErrors, Widget, rules};

use crate::reclamation::NewReclamation;

/// Minimum length of the complaint text, in characters.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Raw submitted state of the reclamation form.
///
/// Values stay exactly as posted so a failed submission re-renders what the
/// client actually typed; `validate` works on trimmed copies.
#[derive(Debug, Clone, Default)]
pub struct ReclamationForm {
    pub email: String,
    pub message: String,
}

impl ReclamationForm {
    /// An unbound form, for the initial GET render.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form bound to posted values.
    pub fn bind(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check every field and produce either a validated submission or the
    /// full set of per-field errors.
    ///
    /// Fields are checked independently so one bad field never hides
    /// another's errors. Within a field, a missing value short-circuits
    /// the remaining checks.
    pub fn validate(&self) -> Result<NewReclamation, FormErrors> {
        let mut errors = FormErrors::new();

        let email_raw = self.email.trim();
        let mut email = None;
        match rules::required(email_raw) {
            Err(err) => errors.push("email", err),
            Ok(()) => match EmailAddress::parse(email_raw) {
                Ok(parsed) => email = Some(parsed),
                Err(field_errors) => errors.extend_field("email", field_errors),
            },
        }

        let message_raw = self.message.trim();
        match rules::required(message_raw) {
            Err(err) => errors.push("message", err),
            Ok(()) => {
                if let Err(err) = rules::min_chars(message_raw, MESSAGE_MIN_CHARS) {
                    errors.push("message", err);
                }
            }
        }

        match (email, errors.is_empty()) {
            (Some(email), true) => Ok(NewReclamation {
                email,
                message: message_raw.to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Field views for rendering, raw values echoed back.
    pub fn view(&self, errors: &FormErrors) -> ReclamationFormView {
        ReclamationFormView {
            email: FieldView::new("Your email", Widget::Email)
                .with_value(self.email.as_str())
                .with_errors(errors.field("email")),
            message: FieldView::new("Your complaint", Widget::Textarea)
                .with_value(self.message.as_str())
                .with_errors(errors.field("message")),
        }
    }
}

/// Render-ready form state.
#[derive(Debug, Clone, Serialize)]
pub struct ReclamationFormView {
    pub email: FieldView,
    pub message: FieldView,
}
