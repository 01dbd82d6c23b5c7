//! Infrastructure layer: product storage, startup seeding, configuration.

pub mod config;
pub mod repository;
pub mod seeder;

pub use config::{CatalogConfig, ConfigError};
pub use repository::{
    InMemoryProductRepository, ProductRepository, RepositoryError, SqliteProductRepository,
};
pub use seeder::{seed_if_empty, SeedError, SeedOutcome};
