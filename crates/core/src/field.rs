//! Field-level validation errors and the per-form error collection.

use thiserror::Error;

/// Why a single field failed validation.
///
/// Keep this focused on deterministic input failures. Each variant is one
/// error *kind*; the `Display` text is what ends up next to the field when
/// the form is re-rendered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field was submitted empty (or not submitted at all).
    #[error("This field is required.")]
    Required,

    /// The value does not parse as an email address.
    #[error("Enter a valid email address.")]
    InvalidEmail,

    /// The value is shorter than the field's minimum length.
    #[error("Ensure this value has at least {min} characters (it has {actual}).")]
    TooShort { min: usize, actual: usize },

    /// The value is longer than the field's maximum length.
    #[error("Ensure this value has at most {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },

    /// The value does not parse as a number.
    #[error("Enter a number.")]
    NotANumber,

    /// The value does not parse as a whole number.
    #[error("Enter a whole number.")]
    NotAnInteger,
}

/// Validation errors for a whole form, keyed by field name.
///
/// Field order is insertion order, so errors render in the same order the
/// form declares its fields. Several fields may carry errors at once, and a
/// single field may carry more than one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    by_field: Vec<(&'static str, Vec<FieldError>)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error against a field.
    pub fn push(&mut self, field: &'static str, error: FieldError) {
        match self.by_field.iter_mut().find(|(name, _)| *name == field) {
            Some((_, errors)) => errors.push(error),
            None => self.by_field.push((field, vec![error])),
        }
    }

    /// Record several errors against a field (no-op on an empty list).
    pub fn extend_field(&mut self, field: &'static str, errors: Vec<FieldError>) {
        for error in errors {
            self.push(field, error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Errors recorded against one field, empty if the field is clean.
    pub fn field(&self, name: &str) -> &[FieldError] {
        self.by_field
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, errors)| errors.as_slice())
            .unwrap_or(&[])
    }

    /// Rendered messages for one field, in the order the rules ran.
    pub fn messages(&self, name: &str) -> Vec<String> {
        self.field(name).iter().map(|e| e.to_string()).collect()
    }

    /// Names of the fields that have at least one error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_field.iter().map(|(name, _)| *name)
    }

    /// Total number of recorded errors across all fields.
    pub fn len(&self) -> usize {
        self.by_field.iter().map(|(_, errors)| errors.len()).sum()
    }
}
