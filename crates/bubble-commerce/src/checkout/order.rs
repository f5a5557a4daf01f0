//! Order snapshots.
//!
//! An order is an immutable record of a completed checkout: line items,
//! totals, and the delivery/payment selections at the moment the
//! customer confirmed. Later catalog or promo changes never affect it.

use crate::cart::{Cart, LineItem};
use crate::checkout::{Bank, CheckoutFlow, DeliveryMethod, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::{CartId, LineItemId, OrderId, ProductId, VariantId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Order status.
///
/// Digital goods have no shipping leg: paid orders go straight to
/// delivery of the account credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed, awaiting payment confirmation.
    #[default]
    Pending,
    /// Payment confirmed.
    Paid,
    /// Account credentials sent to the customer.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Paid => "Paid",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Check if order can be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

/// A completed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Human-readable order number.
    pub order_number: String,
    /// Cart the order was placed from.
    pub cart_id: CartId,
    /// Order status.
    pub status: OrderStatus,
    /// Items in the order.
    pub line_items: Vec<OrderLineItem>,
    /// How the credentials are delivered.
    pub delivery_method: DeliveryMethod,
    /// Where the credentials are sent.
    pub contact_info: String,
    /// How the customer paid.
    pub payment_method: PaymentMethod,
    /// Bank chosen for transfer (None for QRIS).
    pub bank: Option<Bank>,
    /// Promo code redeemed (if any).
    pub promo_code: Option<String>,
    /// Subtotal before tax and discount.
    pub subtotal: Money,
    /// Tax amount.
    pub tax_total: Money,
    /// Total discount amount.
    pub discount_total: Money,
    /// Grand total charged.
    pub grand_total: Money,
    /// Order currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Unix timestamp when cancelled (if applicable).
    pub cancelled_at: Option<i64>,
}

impl Order {
    /// Build an order from a completed checkout and its cart.
    ///
    /// The checkout must have reached the confirmation step; the cart
    /// contents and totals are snapshotted as of this call.
    pub fn from_checkout(flow: &CheckoutFlow, cart: &Cart) -> Result<Self, CommerceError> {
        if !flow.is_complete() {
            return Err(CommerceError::CheckoutIncomplete(
                "checkout not confirmed".to_string(),
            ));
        }
        let delivery_method = flow
            .delivery_method
            .ok_or_else(|| CommerceError::CheckoutIncomplete("delivery method".to_string()))?;
        let contact_info = flow
            .contact_info
            .clone()
            .ok_or_else(|| CommerceError::CheckoutIncomplete("contact info".to_string()))?;
        let payment_method = flow
            .payment_method
            .ok_or_else(|| CommerceError::CheckoutIncomplete("payment method".to_string()))?;

        let subtotal = cart.subtotal()?;
        let totals = flow.totals(subtotal)?;
        let now = current_timestamp();

        Ok(Self {
            id: OrderId::generate(),
            order_number: Self::generate_order_number(),
            cart_id: cart.id.clone(),
            status: OrderStatus::Pending,
            line_items: cart.items.iter().map(OrderLineItem::from_cart_item).collect(),
            delivery_method,
            contact_info,
            payment_method,
            bank: flow.selected_bank,
            promo_code: flow.promo.as_ref().map(|p| p.code.clone()),
            subtotal: totals.subtotal,
            tax_total: totals.tax,
            discount_total: totals.discount,
            grand_total: totals.total,
            currency: cart.currency,
            created_at: now,
            updated_at: now,
            cancelled_at: None,
        })
    }

    /// Generate a new order number.
    ///
    /// Unique even for orders confirmed within the same second.
    pub fn generate_order_number() -> String {
        format!("ORD-{}", crate::ids::generate_id())
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }

    /// Cancel the order.
    pub fn cancel(&mut self) -> bool {
        if !self.status.can_cancel() {
            return false;
        }
        self.status = OrderStatus::Cancelled;
        self.cancelled_at = Some(current_timestamp());
        self.updated_at = current_timestamp();
        true
    }

    /// Update order status.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = current_timestamp();
    }
}

/// A line item frozen into an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Cart line item identifier.
    pub id: LineItemId,
    /// Product ID.
    pub product_id: ProductId,
    /// Variant ID.
    pub variant_id: VariantId,
    /// Product name at time of order.
    pub product_name: String,
    /// Variant name at time of order (e.g., "1 Bulan").
    pub variant_name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order, after per-item discount.
    pub unit_price: Money,
    /// Total price for this line.
    pub total_price: Money,
}

impl OrderLineItem {
    /// Snapshot a cart line item.
    ///
    /// The cart has already validated quantity and price, so the line
    /// total falls back to the unit price only if multiplication would
    /// overflow, which the cart subtotal check rules out.
    fn from_cart_item(item: &LineItem) -> Self {
        let unit_price = item.effective_unit_price();
        let total_price = item.line_total().unwrap_or(unit_price);
        Self {
            id: item.id.clone(),
            product_id: item.product_id.clone(),
            variant_id: item.variant_id.clone(),
            product_name: item.product_name.clone(),
            variant_name: item.variant_name.clone(),
            quantity: item.quantity,
            unit_price,
            total_price,
        }
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
