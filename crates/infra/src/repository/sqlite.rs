//! SQLite-backed product store.
//!
//! The embedded relational store for the catalog. The schema is created on
//! connect; there is no migration tooling.
//!
//! SQLite's `lower()` folds ASCII only, so `name` and `description` each have a
//! `*_folded` twin written with [`fold_case`] and ranked search runs against
//! those.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use catalog_core::{Price, ProductId};
use catalog_products::{fold_case, NewProduct, Product, SearchQuery};

use super::r#trait::{ProductRepository, RepositoryError};

const PRODUCT_COLUMNS: &str = "id, name, description, price_cents, created_at, updated_at";

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products
        (name, description, price_cents, created_at, updated_at, name_folded, description_folded)
    VALUES (?1, ?2, ?3, ?4, ?4, ?5, ?6)
"#;

/// SQLite product store.
///
/// ## Connections
///
/// An in-memory database (`sqlite::memory:`) exists per connection, so for
/// those URLs the pool is pinned to a single connection that never expires.
/// File databases use the configured pool size.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Open (or create) the database at `url` and ensure the schema exists.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| map_sqlx_error("connect", e))?
            .create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        tracing::debug!(url, "connected to product store");
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the `products` table if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, RepositoryError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT    NOT NULL,
                description TEXT    NOT NULL DEFAULT '',
                price_cents INTEGER NOT NULL CHECK (price_cents >= 0),
                created_at  TEXT    NOT NULL,
                updated_at  TEXT    NOT NULL,
                name_folded        TEXT NOT NULL,
                description_folded TEXT NOT NULL DEFAULT ''
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| map_sqlx_error("create_schema", e))?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch_where(
        &self,
        operation: &'static str,
        condition: &str,
        bind: Bind<'_>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE {condition} ORDER BY id");
        let query = sqlx::query(&sql);
        let query = match bind {
            Bind::Text(text) => query.bind(text),
            Bind::Cents(cents) => query.bind(cents),
        };

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(operation, e))?;
        rows.iter().map(product_from_row).collect()
    }
}

enum Bind<'a> {
    Text(&'a str),
    Cents(i64),
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn product_from_row(row: &SqliteRow) -> Result<Product, RepositoryError> {
    let corrupt = |e: sqlx::Error| RepositoryError::CorruptRow(e.to_string());

    let id: i64 = row.try_get("id").map_err(corrupt)?;
    let cents: i64 = row.try_get("price_cents").map_err(corrupt)?;
    let price = Price::from_cents(cents)
        .map_err(|e| RepositoryError::CorruptRow(format!("product {id}: {e}")))?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(corrupt)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(corrupt)?;

    Ok(Product {
        id: ProductId::from_i64(id),
        name: row.try_get("name").map_err(corrupt)?,
        description: row.try_get("description").map_err(corrupt)?,
        price,
        created_at,
        updated_at,
    })
}

fn map_sqlx_error(operation: &'static str, source: sqlx::Error) -> RepositoryError {
    RepositoryError::Database { operation, source }
}

#[async_trait::async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let id = sqlx::query(INSERT_PRODUCT)
            .bind(product.name())
            .bind(product.description())
            .bind(product.price().cents())
            .bind(now)
            .bind(fold_case(product.name()))
            .bind(fold_case(product.description()))
            .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert_product", e))?
        .last_insert_rowid();

        Ok(product.into_product(ProductId::from_i64(id), now, now))
    }

    async fn create_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin_batch", e))?;

        let now = Utc::now();
        let mut created = Vec::with_capacity(products.len());
        for product in products {
            let id = sqlx::query(INSERT_PRODUCT)
                .bind(product.name())
                .bind(product.description())
                .bind(product.price().cents())
                .bind(now)
                .bind(fold_case(product.name()))
                .bind(fold_case(product.description()))
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("insert_batch", e))?
                .last_insert_rowid();

            created.push(product.into_product(ProductId::from_i64(id), now, now));
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit_batch", e))?;
        Ok(created)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1");
        let row = sqlx::query(&sql)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("get_product", e))?;

        row.as_ref().map(product_from_row).transpose()
    }

    async fn update(
        &self,
        id: ProductId,
        product: NewProduct,
    ) -> Result<Option<Product>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = ?1, description = ?2, price_cents = ?3, updated_at = ?4,
                name_folded = ?5, description_folded = ?6
            WHERE id = ?7
            "#,
        )
        .bind(product.name())
        .bind(product.description())
        .bind(product.price().cents())
        .bind(Utc::now())
        .bind(fold_case(product.name()))
        .bind(fold_case(product.description()))
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_product", e))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("list_products", e))?;

        rows.iter().map(product_from_row).collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_products", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| RepositoryError::CorruptRow(format!("failed to read count: {e}")))?;
        Ok(total.max(0) as u64)
    }

    async fn search(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        // instr() instead of LIKE so '%' and '_' in the query are literal.
        let sql = format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE instr(name_folded, ?1) > 0
               OR instr(description_folded, ?1) > 0
            ORDER BY
                CASE WHEN instr(name_folded, ?1) > 0 THEN 0 ELSE 1 END,
                id
            "#
        );
        let query = SearchQuery::new(text);
        let rows = sqlx::query(&sql)
            .bind(query.needle())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("search_products", e))?;

        rows.iter().map(product_from_row).collect()
    }

    async fn find_by_name_containing(&self, text: &str) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("find_by_name", "instr(name, ?1) > 0", Bind::Text(text))
            .await
    }

    async fn find_by_description_containing(
        &self,
        text: &str,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("find_by_description", "instr(description, ?1) > 0", Bind::Text(text))
            .await
    }

    async fn find_by_price_at_most(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("find_by_price_at_most", "price_cents <= ?1", Bind::Cents(bound.cents()))
            .await
    }

    async fn find_by_price_at_least(&self, bound: Price) -> Result<Vec<Product>, RepositoryError> {
        self.fetch_where("find_by_price_at_least", "price_cents >= ?1", Bind::Cents(bound.cents()))
            .await
    }
}
