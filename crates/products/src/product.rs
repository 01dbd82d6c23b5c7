use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Price, ProductId};

/// A catalog item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated product attributes, used for both create and full update.
///
/// The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    name: String,
    description: String,
    price: Price,
}

impl NewProduct {
    /// Validate and build product attributes.
    ///
    /// The name must contain something other than whitespace; the description
    /// may be empty. Surrounding whitespace is trimmed from both.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        let description = description.into().trim().to_string();

        Ok(Self {
            name,
            description,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Materialize a stored product from these attributes.
    pub fn into_product(
        self,
        id: ProductId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        s.parse().unwrap()
    }

    #[test]
    fn new_product_trims_and_keeps_fields() {
        let p = NewProduct::new(
            "  Xbox Series X ",
            "The fastest, most powerful Xbox ever",
            price("499.99"),
        )
        .unwrap();
        assert_eq!(p.name(), "Xbox Series X");
        assert_eq!(p.description(), "The fastest, most powerful Xbox ever");
        assert_eq!(p.price().cents(), 49_999);
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let err = NewProduct::new("   ", "desc", Price::ZERO).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_product_allows_empty_description() {
        let p = NewProduct::new("Raspberry Pi 5", "", price("80")).unwrap();
        assert_eq!(p.description(), "");
    }

    #[test]
    fn into_product_carries_identity_and_timestamps() {
        let now = Utc::now();
        let product = NewProduct::new("Hydro Flask", "Wide mouth bottle", price("32.95"))
            .unwrap()
            .into_product(ProductId::from_i64(3), now, now);

        assert_eq!(product.id, ProductId::from_i64(3));
        assert_eq!(product.name, "Hydro Flask");
        assert_eq!(product.created_at, now);
    }
}
