use std::sync::Arc;

use anyhow::Context;

use catalog_infra::{
    seed_if_empty, CatalogConfig, InMemoryProductRepository, ProductRepository,
    SqliteProductRepository,
};

/// Shared handles the HTTP handlers work against.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductRepository>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// Unseeded in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::new()))
    }

    pub fn products(&self) -> &dyn ProductRepository {
        self.products.as_ref()
    }
}

/// Open the configured store and, if enabled, seed it before any request is served.
pub async fn build_services(config: &CatalogConfig) -> anyhow::Result<AppServices> {
    let database = &config.database;
    let repo = SqliteProductRepository::connect(&database.url, database.max_connections)
        .await
        .context("failed to open product store")?;

    if config.seed_on_startup {
        let outcome = seed_if_empty(&repo)
            .await
            .context("failed to seed product store")?;
        tracing::debug!(?outcome, "startup seeding finished");
    } else {
        tracing::info!("startup seeding disabled");
    }

    Ok(AppServices::new(Arc::new(repo)))
}
