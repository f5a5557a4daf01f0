//! Commerce domain types and logic for the BubblePi storefront.
//!
//! BubblePi sells premium subscription accounts (streaming, design, AI
//! tools). This crate provides the framework-independent core behind the
//! storefront:
//!
//! - **Catalog**: products with purchasable variants (tier, duration, stock)
//! - **Cart**: line items keyed by product+variant, promo codes, totals
//! - **Checkout**: three-step validated flow (shipping, payment, confirmation)
//! - **Search**: in-memory product filtering and stable sorting
//!
//! # Example
//!
//! ```rust,ignore
//! use bubble_commerce::prelude::*;
//!
//! let mut cart = Cart::new("session-1");
//! cart.add_item(LineItem::from_variant(&product, &variant, 1))?;
//!
//! let totals = CartTotals::compute(cart.subtotal()?, cart.promo())?;
//! println!("Total: {}", totals.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Variant};

    // Cart
    pub use crate::cart::{
        AppliedPromo, Cart, CartTotals, LineItem, PromoCode, PromoRegistry, MAX_QUANTITY_PER_ITEM,
        TAX_RATE_PERCENT,
    };

    // Checkout
    pub use crate::checkout::{
        Bank, CheckoutFlow, CheckoutStep, DeliveryMethod, Order, OrderStatus, PaymentMethod,
    };

    // Search
    pub use crate::search::{SearchQuery, SortOption};
}
