//! Payment error types.

use thiserror::Error;

/// Errors from the payment processor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaymentError {
    /// The customer navigated away before processing finished.
    #[error("Payment cancelled")]
    Cancelled,

    /// The charge amount must be positive.
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(i64),

    /// Bank transfer requested without a bank selection.
    #[error("Bank transfer requires a bank selection")]
    MissingBank,
}
