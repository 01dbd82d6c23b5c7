use serde::Deserialize;
use serde_json::json;

use catalog_core::{DomainError, DomainResult, Price};
use catalog_products::{NewProduct, Product};

// -------------------------
// Request DTOs
// -------------------------

/// Body of create and update requests.
///
/// `price` stays raw JSON until conversion so a bad amount is reported as
/// `invalid_price` rather than as a malformed body.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Option<serde_json::Value>,
}

impl ProductRequest {
    pub fn into_new_product(self) -> DomainResult<NewProduct> {
        let price = match self.price {
            Some(raw) => {
                Price::deserialize(raw).map_err(|e| DomainError::invalid_price(e.to_string()))?
            }
            None => return Err(DomainError::invalid_price("missing `price` field")),
        };
        NewProduct::new(self.name, self.description, price)
    }
}

/// `?q=` for text queries; a missing `q` is the empty query.
#[derive(Debug, Default, Deserialize)]
pub struct TextQuery {
    #[serde(default)]
    pub q: String,
}

/// `?price=` for price bounds. Kept as text so malformed amounts get our own error body.
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    pub price: Option<String>,
}

impl PriceQuery {
    pub fn bound(&self) -> DomainResult<Price> {
        match self.price.as_deref() {
            Some(raw) => raw.parse(),
            None => Err(DomainError::invalid_price("missing `price` query parameter")),
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    json!({
        "id": p.id,
        "name": p.name,
        "description": p.description,
        "price": p.price,
        "created_at": p.created_at.to_rfc3339(),
        "updated_at": p.updated_at.to_rfc3339(),
    })
}

pub fn products_to_json(items: &[Product]) -> serde_json::Value {
    json!({ "items": items.iter().map(product_to_json).collect::<Vec<_>>() })
}
