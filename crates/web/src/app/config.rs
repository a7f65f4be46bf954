//! Process configuration, read once at startup.
//!
//! Every knob is an environment variable with a dev-friendly default so the
//! app boots with no setup. Fallbacks that matter in production are logged
//! as warnings.

use anyhow::Context as _;

use comptoir_core::{EmailAddress, FieldError};
use comptoir_mail::{SmtpConfig, SmtpSecurity};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ADMIN_EMAIL: &str = "sav@comptoir.example";
const DEFAULT_SMTP_PORT: u16 = 587;

#[derive(Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Recipient of contact-form notifications.
    pub admin_email: EmailAddress,
    pub mail_backend: MailBackend,
    pub use_persistent_stores: bool,
    pub database_url: Option<String>,
}

#[derive(Debug)]
pub enum MailBackend {
    /// Log outbound mail instead of delivering it (dev default).
    Console,
    Smtp(SmtpConfig),
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let raw_admin = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_EMAIL not set; using {}", DEFAULT_ADMIN_EMAIL);
            DEFAULT_ADMIN_EMAIL.to_string()
        });
        let admin_email = EmailAddress::parse(&raw_admin).map_err(|errors| {
            anyhow::anyhow!("ADMIN_EMAIL {:?} rejected: {}", raw_admin, join_messages(&errors))
        })?;

        let mail_backend = match std::env::var("MAIL_BACKEND").as_deref() {
            Ok("smtp") => MailBackend::Smtp(load_smtp_config()?),
            Ok("console") | Err(_) => MailBackend::Console,
            Ok(other) => {
                anyhow::bail!("MAIL_BACKEND must be \"console\" or \"smtp\", got {:?}", other)
            }
        };

        let use_persistent_stores = std::env::var("USE_PERSISTENT_STORES")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            admin_email,
            mail_backend,
            use_persistent_stores,
            database_url: std::env::var("DATABASE_URL").ok(),
        })
    }
}

fn load_smtp_config() -> anyhow::Result<SmtpConfig> {
    let host = std::env::var("SMTP_HOST").context("SMTP_HOST must be set when MAIL_BACKEND=smtp")?;
    let port = match std::env::var("SMTP_PORT") {
        Ok(raw) => raw.parse::<u16>().context("SMTP_PORT must be a port number")?,
        Err(_) => DEFAULT_SMTP_PORT,
    };

    let mut smtp = SmtpConfig::new(host, port);
    if let (Ok(username), Ok(password)) =
        (std::env::var("SMTP_USERNAME"), std::env::var("SMTP_PASSWORD"))
    {
        smtp = smtp.with_credentials(username, password);
    }

    let security = match std::env::var("SMTP_SECURITY").as_deref() {
        Ok("none") => SmtpSecurity::None,
        Ok("starttls") | Err(_) => SmtpSecurity::StartTls,
        Ok("tls") => SmtpSecurity::Tls,
        Ok(other) => {
            anyhow::bail!("SMTP_SECURITY must be \"none\", \"starttls\" or \"tls\", got {:?}", other)
        }
    };

    Ok(smtp.with_security(security))
}

fn join_messages(errors: &[FieldError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join(", ")
}
