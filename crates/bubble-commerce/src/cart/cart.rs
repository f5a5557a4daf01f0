//! Cart and line item types.

use crate::cart::AppliedPromo;
use crate::catalog::{Product, Variant};
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, ProductId, SessionId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Line items are ordered and unique by their composite product+variant
/// key; adding the same variant again merges quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Session the cart belongs to.
    pub session_id: SessionId,
    /// Items in the cart.
    pub items: Vec<LineItem>,
    /// Applied promo code, if any. One at a time; applying another replaces it.
    pub promo: Option<AppliedPromo>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart for a session.
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            session_id: session_id.into(),
            items: Vec::new(),
            promo: None,
            currency: Currency::IDR,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add an item to the cart.
    ///
    /// If a line with the same composite id already exists, its quantity
    /// is incremented by the incoming quantity; otherwise the item is
    /// appended.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The merged quantity would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(&mut self, item: LineItem) -> Result<LineItemId, CommerceError> {
        if item.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(item.quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let new_quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            self.updated_at = current_timestamp();
            return Ok(existing.id.clone());
        }

        if item.quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                item.quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let id = item.id.clone();
        self.items.push(item);
        self.updated_at = current_timestamp();
        Ok(id)
    }

    /// Update a line's quantity.
    ///
    /// A quantity of zero or less removes the line; the return value is
    /// then whether a line was actually removed. Returns an error if the
    /// quantity exceeds the per-line limit.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(line_item_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == line_item_id) {
            item.quantity = quantity;
            self.updated_at = current_timestamp();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove an item from the cart. No-op (returns false) if absent.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        let removed = self.items.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Clear all items and the applied promo.
    ///
    /// Called once, after checkout completion.
    pub fn clear(&mut self) {
        self.items.clear();
        self.promo = None;
        self.updated_at = current_timestamp();
    }

    /// Apply a promo to the cart, replacing any previous one.
    pub fn apply_promo(&mut self, promo: AppliedPromo) {
        self.promo = Some(promo);
        self.updated_at = current_timestamp();
    }

    /// Remove the applied promo. Returns whether one was applied.
    pub fn remove_promo(&mut self) -> bool {
        let removed = self.promo.take().is_some();
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// The applied promo, if any.
    pub fn promo(&self) -> Option<&AppliedPromo> {
        self.promo.as_ref()
    }

    /// Get total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Get number of unique lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn get_item(&self, line_item_id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == line_item_id)
    }

    /// Cart subtotal.
    ///
    /// Per-item percentage discounts are applied to the unit price before
    /// multiplying by quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency);
        for item in &self.items {
            let line = item.line_total().ok_or(CommerceError::Overflow)?;
            total = total
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: line.currency.code().to_string(),
                })?;
        }
        Ok(total)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new("anonymous")
    }
}

/// A line item in the cart.
///
/// Identified by the composite product+variant key, so one variant is
/// always one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Composite line identifier (product+variant).
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Variant being purchased.
    pub variant_id: VariantId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Variant name (e.g., "1p1u", "Private").
    pub variant_name: String,
    /// Product image URL (denormalized for display).
    pub image_url: String,
    /// Unit price before any per-item discount.
    pub unit_price: Money,
    /// Per-item percentage discount (e.g., 10.0 for 10% off), if any.
    pub discount_percent: Option<f64>,
    /// Quantity. Invariant: at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Create a line item from a catalog product and variant.
    pub fn from_variant(product: &Product, variant: &Variant, quantity: i64) -> Self {
        Self {
            id: LineItemId::for_variant(&product.id, &variant.id),
            product_id: product.id.clone(),
            variant_id: variant.id.clone(),
            product_name: product.name.clone(),
            variant_name: variant.name.clone(),
            image_url: product.image_url.clone(),
            unit_price: variant.price,
            discount_percent: None,
            quantity,
        }
    }

    /// Set a per-item percentage discount.
    pub fn with_discount_percent(mut self, percent: f64) -> Self {
        self.discount_percent = Some(percent);
        self
    }

    /// Unit price after the per-item discount, if any.
    pub fn effective_unit_price(&self) -> Money {
        match self.discount_percent {
            Some(percent) => self
                .unit_price
                .try_subtract(&self.unit_price.percentage(percent))
                .unwrap_or(self.unit_price),
            None => self.unit_price,
        }
    }

    /// Total for this line (discounted unit price times quantity).
    pub fn line_total(&self) -> Option<Money> {
        self.effective_unit_price().try_multiply(self.quantity)
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
