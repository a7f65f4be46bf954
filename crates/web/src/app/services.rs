//! Backend wiring: storage, outbound mail, and the template registry.

use std::sync::Arc;

use anyhow::Context as _;
use tera::Tera;

use comptoir_core::EmailAddress;
use comptoir_infra::{
    InMemoryProductStore, InMemoryReclamationStore, ProductStore, ReclamationStore,
};
use comptoir_mail::{ConsoleMailer, Mailer, SmtpMailer};

use crate::app::config::{AppConfig, MailBackend};
use crate::app::templates;

/// Shared handler state, passed around as `Extension<Arc<AppServices>>`.
pub struct AppServices {
    pub reclamations: Arc<dyn ReclamationStore>,
    pub products: Arc<dyn ProductStore>,
    pub mailer: Arc<dyn Mailer>,
    pub admin_email: EmailAddress,
    pub templates: Tera,
}

pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let (reclamations, products) = build_stores(config).await?;
    let mailer = build_mailer(config)?;
    let templates = templates::build_templates().context("template registry failed to load")?;

    Ok(AppServices {
        reclamations,
        products,
        mailer,
        admin_email: config.admin_email.clone(),
        templates,
    })
}

async fn build_stores(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn ReclamationStore>, Arc<dyn ProductStore>)> {
    if config.use_persistent_stores {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_stores(config).await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            return Ok(build_in_memory_stores());
        }
    }

    Ok(build_in_memory_stores())
}

fn build_in_memory_stores() -> (Arc<dyn ReclamationStore>, Arc<dyn ProductStore>) {
    (
        Arc::new(InMemoryReclamationStore::new()),
        Arc::new(InMemoryProductStore::new()),
    )
}

#[cfg(feature = "postgres")]
async fn build_persistent_stores(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn ReclamationStore>, Arc<dyn ProductStore>)> {
    use comptoir_infra::{PostgresProductStore, PostgresReclamationStore, connect, ensure_schema};

    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set when USE_PERSISTENT_STORES=true")?;

    let pool = connect(database_url).await?;
    ensure_schema(&pool).await?;

    Ok((
        Arc::new(PostgresReclamationStore::new(pool.clone())),
        Arc::new(PostgresProductStore::new(pool)),
    ))
}

fn build_mailer(config: &AppConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    match &config.mail_backend {
        MailBackend::Console => Ok(Arc::new(ConsoleMailer)),
        MailBackend::Smtp(smtp) => Ok(Arc::new(SmtpMailer::new(smtp.clone())?)),
    }
}
