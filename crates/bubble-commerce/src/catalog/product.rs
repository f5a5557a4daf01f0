//! Product and variant types.

use crate::ids::{CategoryId, ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products here are subscription accounts (Netflix, Canva, ...); each
/// purchasable tier is a [`Variant`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings and search.
    pub description: String,
    /// URL of the product image.
    pub image_url: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Popularity score used by the default sort order.
    pub popularity: i64,
    /// Purchasable variants.
    pub variants: Vec<Variant>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a new product with no variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image_url: String::new(),
            category: category.into(),
            popularity: 0,
            variants: Vec::new(),
            created_at: current_timestamp(),
        }
    }

    /// Set the product image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Set the popularity score.
    pub fn with_popularity(mut self, popularity: i64) -> Self {
        self.popularity = popularity;
        self
    }

    /// Add a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Get a variant by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&Variant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// The cheapest variant price, if any variant exists.
    ///
    /// This is the value listings display and the value price filters
    /// and price sorts compare against.
    pub fn min_price(&self) -> Option<Money> {
        self.variants.iter().map(|v| v.price).min_by_key(|m| m.amount)
    }

    /// Check if at least one variant can be purchased.
    pub fn is_purchasable(&self) -> bool {
        self.variants.iter().any(Variant::is_in_stock)
    }
}

/// A purchasable variant of a product (e.g., a sharing tier).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant name (e.g., "1p1u", "Private").
    pub name: String,
    /// Subscription duration label (e.g., "1 bulan").
    pub duration: String,
    /// Price of this variant.
    pub price: Money,
    /// Units available. Invariant: never negative.
    pub stock: i64,
}

impl Variant {
    /// Create a new variant. Negative stock is clamped to zero.
    pub fn new(
        id: impl Into<VariantId>,
        name: impl Into<String>,
        duration: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration: duration.into(),
            price,
            stock: stock.max(0),
        }
    }

    /// Check if this variant can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
