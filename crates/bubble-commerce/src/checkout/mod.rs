//! Checkout module.
//!
//! Contains the checkout flow state machine, delivery methods, payment
//! method selection, and order snapshots.

mod delivery;
mod flow;
mod order;
mod payment;

pub use delivery::DeliveryMethod;
pub use flow::{CheckoutFlow, CheckoutStep};
pub use order::{Order, OrderLineItem, OrderStatus};
pub use payment::{Bank, PaymentMethod};
