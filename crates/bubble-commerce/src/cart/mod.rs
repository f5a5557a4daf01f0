//! Shopping cart module.
//!
//! Contains types for the cart, line items, totals, and promo codes.

mod cart;
mod pricing;
mod promo;

pub use cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartTotals, TAX_RATE_PERCENT};
pub use promo::{AppliedPromo, PromoCode, PromoRegistry};
