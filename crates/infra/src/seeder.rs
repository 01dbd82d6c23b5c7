//! Startup population of an empty catalog.
//!
//! The emptiness check and the batch insert are separate statements, so two
//! processes seeding the same database at the same moment can both insert.
//! Seeding runs once, before the server accepts requests.

use thiserror::Error;

use catalog_core::DomainError;
use catalog_products::seed_products;

use crate::repository::{ProductRepository, RepositoryError};

/// What the seeder did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the sample catalog was inserted.
    Seeded { inserted: usize },
    /// The store already held products; nothing was written.
    Skipped { existing: u64 },
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid sample product: {0}")]
    InvalidSample(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Insert the sample catalog if, and only if, the store holds no products.
pub async fn seed_if_empty<R>(repo: &R) -> Result<SeedOutcome, SeedError>
where
    R: ProductRepository + ?Sized,
{
    let existing = repo.count().await?;
    if existing > 0 {
        tracing::info!(existing, "catalog already populated; skipping seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let inserted = repo.create_batch(seed_products()?).await?.len();
    tracing::info!(inserted, "seeded sample catalog");
    Ok(SeedOutcome::Seeded { inserted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, SqliteProductRepository};
    use catalog_products::{NewProduct, SEED_PRODUCTS};

    #[tokio::test]
    async fn seeds_an_empty_store_once() {
        let repo = InMemoryProductRepository::new();

        let first = seed_if_empty(&repo).await.unwrap();
        assert_eq!(first, SeedOutcome::Seeded { inserted: SEED_PRODUCTS.len() });
        assert_eq!(repo.count().await.unwrap(), 50);

        let second = seed_if_empty(&repo).await.unwrap();
        assert_eq!(second, SeedOutcome::Skipped { existing: 50 });
        assert_eq!(repo.count().await.unwrap(), 50);
    }

    #[tokio::test]
    async fn skips_when_a_single_product_exists() {
        let repo = InMemoryProductRepository::new();
        repo.create(NewProduct::new("Existing", "", "1".parse().unwrap()).unwrap())
            .await
            .unwrap();

        let outcome = seed_if_empty(&repo).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Skipped { existing: 1 });
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeds_sqlite_store() {
        let repo = SqliteProductRepository::connect("sqlite::memory:", 1).await.unwrap();

        let outcome = seed_if_empty(&repo).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 50 });
        assert!(matches!(seed_if_empty(&repo).await.unwrap(), SeedOutcome::Skipped { .. }));
        assert_eq!(repo.count().await.unwrap(), 50);
    }

    #[tokio::test]
    async fn works_through_a_trait_object() {
        let repo: std::sync::Arc<dyn ProductRepository> =
            std::sync::Arc::new(InMemoryProductRepository::new());
        let outcome = seed_if_empty(repo.as_ref()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 50 });
    }
}
