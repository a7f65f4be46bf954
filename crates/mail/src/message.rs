//! The message shape handed to a mail backend.

use comptoir_core::EmailAddress;

/// A fully composed plain-text message.
///
/// Addresses are already validated; backends only translate and deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub subject: String,
    pub body: String,
    pub from: EmailAddress,
    pub to: EmailAddress,
}

impl OutboundEmail {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        from: EmailAddress,
        to: EmailAddress,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            from,
            to,
        }
    }
}
