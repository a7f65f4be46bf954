//! Presentation-side description of a form field.
//!
//! Forms expose a `view()` that maps their raw state plus any validation
//! errors into [`FieldView`] values the templates can render without knowing
//! anything about the form's domain.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldError;

/// Input control a field renders as.
///
/// Serializes to the lowercase control name so templates can branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    Text,
    Email,
    Textarea,
    Number,
    Checkbox,
}

/// Everything a template needs for one field: the label, the control to
/// render, the raw submitted value and the validation messages against it.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub label: String,
    pub widget: Widget,
    /// Raw submitted text, echoed back verbatim on re-render.
    pub value: String,
    pub errors: Vec<String>,
    pub help_text: Option<String>,
    /// Extra HTML attributes, ordered so renders are stable.
    pub attrs: BTreeMap<String, String>,
}

impl FieldView {
    pub fn new(label: impl Into<String>, widget: Widget) -> Self {
        Self {
            label: label.into(),
            widget,
            value: String::new(),
            errors: Vec::new(),
            help_text: None,
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_errors(mut self, errors: &[FieldError]) -> Self {
        self.errors = errors.iter().map(|e| e.to_string()).collect();
        self
    }
}
