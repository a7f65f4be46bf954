use std::sync::Arc;

use anyhow::Context as _;

use comptoir_web::app::{self, config::AppConfig, services};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    comptoir_observability::init();

    let config = AppConfig::load()?;
    let app_services = services::build_services(&config).await?;
    let app = app::build_app(Arc::new(app_services));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
