//! Product filter queries.
//!
//! A query combines independent predicates (category, text, price
//! range) with a sort order. Predicates are conjunctive; an unset
//! predicate matches everything. Price predicates compare against the
//! product's minimum variant price, matching what listings display.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};

/// A filter-and-sort query over the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// Restrict to one category.
    pub category: Option<CategoryId>,
    /// Case-insensitive substring matched against name and description.
    pub text: Option<String>,
    /// Minimum price (inclusive).
    pub min_price: Option<Money>,
    /// Maximum price (inclusive).
    pub max_price: Option<Money>,
    /// Result ordering.
    pub sort: SortOption,
}

impl SearchQuery {
    /// Create an empty query: matches everything, sorted by popularity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn in_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a text filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an inclusive price range. Either bound may be None.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check if a product matches every set predicate.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }

        if self.min_price.is_some() || self.max_price.is_some() {
            // Price filters can only match products with a price
            let Some(price) = product.min_price() else {
                return false;
            };
            if let Some(min) = &self.min_price {
                if price.amount < min.amount {
                    return false;
                }
            }
            if let Some(max) = &self.max_price {
                if price.amount > max.amount {
                    return false;
                }
            }
        }

        true
    }

    /// Run the query: filter, then sort stably.
    ///
    /// An empty result is a valid result, never an error.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut results: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        self.sort.sort(&mut results);
        results
    }
}
