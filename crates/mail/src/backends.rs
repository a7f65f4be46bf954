//! Delivery backends.

use std::sync::Mutex;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::MailError;
use crate::message::OutboundEmail;

/// Sends one message through whatever transport the backend wraps.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// How the SMTP connection is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpSecurity {
    /// Plaintext, for local relays and test servers.
    None,
    /// STARTTLS upgrade on a plaintext port, the usual submission setup.
    StartTls,
    /// TLS from the first byte.
    Tls,
}

/// Connection settings for [`SmtpMailer`].
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Option<(String, String)>,
    pub security: SmtpSecurity,
}

impl SmtpConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            credentials: None,
            security: SmtpSecurity::StartTls,
        }
    }

    pub fn with_credentials(mut self, username: String, password: String) -> Self {
        self.credentials = Some((username, password));
        self
    }

    pub fn with_security(mut self, security: SmtpSecurity) -> Self {
        self.security = security;
        self
    }
}

/// Real delivery over SMTP.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Result<Self, MailError> {
        let mut builder = match config.security {
            SmtpSecurity::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
            }
            SmtpSecurity::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|err| MailError::Transport(err.to_string()))?
            }
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|err| MailError::Transport(err.to_string()))?,
        };
        builder = builder.port(config.port);
        if let Some((username, password)) = config.credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }
        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip(self, email), fields(to = %email.to, subject = %email.subject), err)]
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|err| MailError::Transport(err.to_string()))?;
        Ok(())
    }
}

fn build_message(email: &OutboundEmail) -> Result<Message, MailError> {
    let from: Mailbox = email
        .from
        .as_str()
        .parse()
        .map_err(|err: lettre::address::AddressError| MailError::InvalidAddress(err.to_string()))?;
    let to: Mailbox = email
        .to
        .as_str()
        .parse()
        .map_err(|err: lettre::address::AddressError| MailError::InvalidAddress(err.to_string()))?;
    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .body(email.body.clone())
        .map_err(|err| MailError::Build(err.to_string()))
}

/// Development backend that logs messages instead of delivering them.
#[derive(Debug, Default)]
pub struct ConsoleMailer;

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        tracing::info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            body = %email.body,
            "outbound email (console backend)"
        );
        Ok(())
    }
}

/// In-memory outbox for tests. Records every sent message, or fails every
/// send when constructed with [`MemoryMailer::failing`].
#[derive(Debug, Default)]
pub struct MemoryMailer {
    outbox: Mutex<Vec<OutboundEmail>>,
    fail_with: Option<String>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outbox: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// Everything sent so far, in send order.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        match self.outbox.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if let Some(reason) = &self.fail_with {
            return Err(MailError::Transport(reason.clone()));
        }
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| MailError::Transport("outbox lock poisoned".into()))?;
        outbox.push(email.clone());
        Ok(())
    }
}
