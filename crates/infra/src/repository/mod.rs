//! Product storage boundary.
//!
//! `ProductRepository` is the query interface the rest of the service talks
//! to; the in-memory and SQLite stores implement it with the same semantics.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryProductRepository;
pub use r#trait::{ProductRepository, RepositoryError};
pub use sqlite::SqliteProductRepository;
