//! Products domain module (catalog).
//!
//! This crate contains the catalog entity, the ranked text search and the
//! fixed sample catalog, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod product;
pub mod search;
pub mod seed;

pub use product::{NewProduct, Product};
pub use search::{fold_case, rank, SearchQuery, SearchTier};
pub use seed::{seed_products, SEED_PRODUCTS};
