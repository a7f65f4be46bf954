//! Validated email address value.

use serde::Serialize;

use crate::field::FieldError;
use crate::rules;

/// Maximum accepted length of an address, in characters (RFC 5321 cap).
pub const MAX_EMAIL_CHARS: usize = 254;

/// An email address that has passed syntax and length validation.
///
/// Constructing one through [`EmailAddress::parse`] is the only way to get
/// an instance, so any `EmailAddress` reaching the store or the mailer is
/// known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate `raw` and wrap it.
    ///
    /// Both rules run independently, so an address that is malformed *and*
    /// over-long reports both failures at once.
    pub fn parse(raw: &str) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Err(e) = rules::valid_email(raw) {
            errors.push(e);
        }
        if let Err(e) = rules::max_chars(raw, MAX_EMAIL_CHARS) {
            errors.push(e);
        }
        if errors.is_empty() {
            Ok(Self(raw.to_owned()))
        } else {
            Err(errors)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
