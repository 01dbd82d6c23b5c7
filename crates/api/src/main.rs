use std::sync::Arc;

use anyhow::Context;

use catalog_infra::CatalogConfig;
use catalog_observability::LogSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::load().context("failed to load configuration")?;

    catalog_observability::tracing::init(&LogSettings {
        default_filter: config.telemetry.log_level.clone(),
        json: config.telemetry.json,
    });

    let services = catalog_api::app::services::build_services(&config).await?;
    let app = catalog_api::app::build_app(Arc::new(services));

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server terminated")?;
    Ok(())
}
