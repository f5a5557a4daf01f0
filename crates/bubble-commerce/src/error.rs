//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// None of these are fatal to the process: validation and promo errors
/// are user-facing messages, not-found errors on cart items are treated
/// as no-ops by callers that can tolerate them.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Variant not found.
    #[error("Variant not found: {0}")]
    VariantNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Variant has no stock left.
    #[error("Out of stock: {product} ({variant})")]
    OutOfStock { product: String, variant: String },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Contact info does not match the delivery method's expected shape.
    #[error("Invalid contact info for {method} delivery: {reason}")]
    InvalidContactInfo { method: String, reason: String },

    /// Unknown or inactive promo code.
    #[error("Invalid promo code: {0}")]
    InvalidPromoCode(String),

    /// Promo code outside its activation window.
    #[error("Promo code expired: {0}")]
    PromoExpired(String),

    /// Promo code usage limit reached.
    #[error("Promo code usage limit reached: {0}")]
    PromoUsageLimitReached(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
