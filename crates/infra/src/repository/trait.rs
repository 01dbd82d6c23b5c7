use std::sync::Arc;

use thiserror::Error;

use catalog_core::{Price, ProductId};
use catalog_products::{NewProduct, Product};

/// Product storage error.
///
/// These are **infrastructure errors** (connectivity, constraints, corrupt
/// rows). Missing products are not errors: lookups return `None` / `false`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("corrupt product row: {0}")]
    CorruptRow(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Query interface over the product table.
///
/// Implementations must be safe to share across request handlers.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns id and timestamps.
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError>;

    /// Insert several products at once (all or nothing), preserving input order.
    async fn create_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Replace name, description and price. `None` if the product does not exist.
    async fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Returns `false` if there was nothing to delete.
    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError>;

    /// Every product, ordered by id.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Ranked search: case-insensitive substring of name or description, name
    /// matches first. The empty query matches everything.
    async fn search(&self, text: &str) -> Result<Vec<Product>, RepositoryError>;

    /// Case-sensitive substring match on the name.
    async fn find_by_name_containing(&self, text: &str) -> Result<Vec<Product>, RepositoryError>;

    /// Case-sensitive substring match on the description.
    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_price_at_most(&self, bound: Price) -> Result<Vec<Product>, RepositoryError>;

    async fn find_by_price_at_least(&self, bound: Price) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait::async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        (**self).create(product).await
    }

    async fn create_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError> {
        (**self).create_batch(products).await
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        (**self).get(id).await
    }

    async fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        (**self).update(id, product).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        (**self).delete(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).list().await
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        (**self).count().await
    }

    async fn search(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        (**self).search(text).await
    }

    async fn find_by_name_containing(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_by_name_containing(text).await
    }

    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_by_description_containing(text).await
    }

    async fn find_by_price_at_most(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_by_price_at_most(bound).await
    }

    async fn find_by_price_at_least(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_by_price_at_least(bound).await
    }
}
