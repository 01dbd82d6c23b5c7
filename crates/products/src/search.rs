//! Ranked substring search over the catalog.
//!
//! A product matches a query when the query occurs, ignoring case, in its name
//! or its description. Name matches rank ahead of description-only matches;
//! order inside a tier carries no meaning.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Relevance tier of a search match. Lower sorts first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTier {
    /// The query occurs in the product name.
    Name = 0,
    /// The query occurs only in the description.
    Description = 1,
}

impl SearchTier {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Case folding shared by queries and stored text.
///
/// Stores that search in SQL keep a folded copy of each searchable column so
/// they agree with [`rank`] on every script, not only ASCII.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// A case-folded search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: fold_case(text),
        }
    }

    /// Case-folded query text.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Classify a candidate; `None` means it does not match at all.
    ///
    /// The empty query is contained in every string, so it matches every
    /// product at the name tier.
    pub fn tier(&self, name: &str, description: &str) -> Option<SearchTier> {
        if fold_case(name).contains(&self.needle) {
            Some(SearchTier::Name)
        } else if fold_case(description).contains(&self.needle) {
            Some(SearchTier::Description)
        } else {
            None
        }
    }

    pub fn tier_of(&self, product: &Product) -> Option<SearchTier> {
        self.tier(&product.name, &product.description)
    }
}

/// Filter `products` down to the matches for `text`, name matches first.
///
/// The sort is stable, so matches keep their input order within a tier.
pub fn rank(text: &str, products: impl IntoIterator<Item = Product>) -> Vec<Product> {
    let query = SearchQuery::new(text);
    let mut matches: Vec<(SearchTier, Product)> = products
        .into_iter()
        .filter_map(|p| query.tier_of(&p).map(|tier| (tier, p)))
        .collect();
    matches.sort_by_key(|(tier, _)| *tier);
    matches.into_iter().map(|(_, p)| p).collect()
}
