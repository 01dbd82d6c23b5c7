use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use catalog_core::{Price, ProductId};
use catalog_products::{rank, NewProduct, Product};

use super::r#trait::{ProductRepository, RepositoryError};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

impl Table {
    fn insert(&mut self, product: NewProduct) -> Product {
        self.last_id += 1;
        let id = ProductId::from_i64(self.last_id);
        let now = Utc::now();
        let product = product.into_product(id, now, now);
        self.rows.insert(id, product.clone());
        product
    }

    fn filter(&self, pred: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.rows.values().filter(|p| pred(p)).cloned().collect()
    }
}

/// In-memory product store.
///
/// Intended for tests/dev. Ids are assigned from a counter and never reused,
/// even after deletes.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Table>, RepositoryError> {
        self.table
            .read()
            .map_err(|_| RepositoryError::Unavailable("product table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Table>, RepositoryError> {
        self.table
            .write()
            .map_err(|_| RepositoryError::Unavailable("product table lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        Ok(self.write()?.insert(product))
    }

    async fn create_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut table = self.write()?;
        Ok(products.into_iter().map(|p| table.insert(p)).collect())
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        Ok(self.read()?.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut table = self.write()?;
        let Some(existing) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        *existing = product.into_product(id, existing.created_at, Utc::now());
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        Ok(self.write()?.rows.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.read()?.rows.len() as u64)
    }

    async fn search(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        let table = self.read()?;
        Ok(rank(text, table.rows.values().cloned()))
    }

    async fn find_by_name_containing(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.filter(|p| p.name.contains(text)))
    }

    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.filter(|p| p.description.contains(text)))
    }

    async fn find_by_price_at_most(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.filter(|p| p.price <= bound))
    }

    async fn find_by_price_at_least(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.read()?.filter(|p| p.price >= bound))
    }
}
