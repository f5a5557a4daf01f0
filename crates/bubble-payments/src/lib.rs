//! Simulated payment processing for the BubblePi storefront.
//!
//! No real gateway is involved. The [`PaymentProcessor`] validates a
//! request, simulates gateway latency, and produces the
//! [`PaymentInstructions`] the customer follows to pay out-of-band
//! (QRIS scan or manual bank transfer). Processing is cancellable via a
//! `CancellationToken` so a customer navigating away never leaks a
//! pending task.

mod error;
mod instructions;
mod processor;

pub use error::PaymentError;
pub use instructions::{PaymentInstructions, ACCOUNT_NAME, QRIS_EXPIRY_HOURS};
pub use processor::{PaymentProcessor, PaymentRequest};
