//! Outbound email delivery.
//!
//! A single [`Mailer`] trait over sending one message, with three backends:
//! SMTP via `lettre` for real delivery, a console backend that only logs,
//! and an in-memory outbox for tests.

pub mod backends;
pub mod message;

use thiserror::Error;

pub use backends::{ConsoleMailer, Mailer, MemoryMailer, SmtpConfig, SmtpMailer, SmtpSecurity};
pub use message::OutboundEmail;

/// Failure while building or delivering a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    /// An address was rejected by the transport's own parser.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled.
    #[error("could not build message: {0}")]
    Build(String),

    /// The backend accepted the message but could not deliver it.
    #[error("delivery failed: {0}")]
    Transport(String),
}
