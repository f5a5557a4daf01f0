//! In-memory catalog container.

use crate::catalog::{Category, Product, Variant};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId, VariantId};
use serde::{Deserialize, Serialize};

/// The product catalog.
///
/// Holds the full product and category lists in memory. The data itself
/// is supplied by whatever loads it; this type only provides lookups and
/// the purchasability check the cart relies on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from products and categories.
    pub fn with_data(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a product by ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == product_id)
    }

    /// Look up a category by ID.
    pub fn category(&self, category_id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == category_id)
    }

    /// Products in a category, preserving catalog order.
    pub fn in_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category == category_id)
            .collect()
    }

    /// Resolve a product+variant pair.
    pub fn variant(
        &self,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> Result<(&Product, &Variant), CommerceError> {
        let product = self
            .get(product_id)
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        let variant = product
            .variant(variant_id)
            .ok_or_else(|| CommerceError::VariantNotFound(variant_id.to_string()))?;
        Ok((product, variant))
    }

    /// Resolve a product+variant pair, rejecting variants with no stock.
    ///
    /// A variant with zero stock is unpurchasable.
    pub fn purchasable(
        &self,
        product_id: &ProductId,
        variant_id: &VariantId,
    ) -> Result<(&Product, &Variant), CommerceError> {
        let (product, variant) = self.variant(product_id, variant_id)?;
        if !variant.is_in_stock() {
            return Err(CommerceError::OutOfStock {
                product: product.name.clone(),
                variant: variant.name.clone(),
            });
        }
        Ok((product, variant))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        let products = vec![
            Product::new("netflix", "Netflix", "Streaming platform", "streaming")
                .with_variant(Variant::new("1p1u", "1p1u", "1 bulan", Money::idr(25000), 10))
                .with_variant(Variant::new("private", "Private", "1 bulan", Money::idr(110000), 0)),
            Product::new("canva", "Canva", "Design platform", "design")
                .with_variant(Variant::new("invite", "Invite", "1 bulan", Money::idr(5000), 20)),
        ];
        let categories = vec![
            Category::new("streaming", "Streaming"),
            Category::new("design", "Design"),
        ];
        Catalog::with_data(products, categories)
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog();
        assert!(catalog.get(&ProductId::new("netflix")).is_some());
        assert!(catalog.get(&ProductId::new("missing")).is_none());
        assert!(catalog.category(&CategoryId::new("design")).is_some());
    }

    #[test]
    fn test_in_category() {
        let catalog = catalog();
        let streaming = catalog.in_category(&CategoryId::new("streaming"));
        assert_eq!(streaming.len(), 1);
        assert_eq!(streaming[0].name, "Netflix");
    }

    #[test]
    fn test_purchasable_ok() {
        let catalog = catalog();
        let (product, variant) = catalog
            .purchasable(&ProductId::new("netflix"), &VariantId::new("1p1u"))
            .unwrap();
        assert_eq!(product.name, "Netflix");
        assert_eq!(variant.price, Money::idr(25000));
    }

    #[test]
    fn test_purchasable_out_of_stock() {
        let catalog = catalog();
        let err = catalog
            .purchasable(&ProductId::new("netflix"), &VariantId::new("private"))
            .unwrap_err();
        assert!(matches!(err, CommerceError::OutOfStock { .. }));
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = catalog();
        assert!(matches!(
            catalog.variant(&ProductId::new("nope"), &VariantId::new("1p1u")),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert!(matches!(
            catalog.variant(&ProductId::new("netflix"), &VariantId::new("nope")),
            Err(CommerceError::VariantNotFound(_))
        ));
    }
}
