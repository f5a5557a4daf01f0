//! Simulated payment processor.

use crate::{PaymentError, PaymentInstructions};
use bubble_commerce::checkout::{Bank, PaymentMethod};
use bubble_commerce::money::Money;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Default simulated gateway latency.
const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// A request to set up payment for an order total.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    /// How the customer pays.
    pub method: PaymentMethod,
    /// Bank for transfers. Ignored for QRIS.
    pub bank: Option<Bank>,
    /// Amount to charge.
    pub amount: Money,
}

impl PaymentRequest {
    /// Request QRIS payment.
    pub fn qris(amount: Money) -> Self {
        Self {
            method: PaymentMethod::Qris,
            bank: None,
            amount,
        }
    }

    /// Request a bank transfer.
    pub fn bank_transfer(bank: Bank, amount: Money) -> Self {
        Self {
            method: PaymentMethod::BankTransfer,
            bank: Some(bank),
            amount,
        }
    }
}

/// Stand-in for a payment gateway.
///
/// No real charge happens. The processor validates the request, waits
/// the configured latency, then hands back the instructions the
/// customer needs to pay out-of-band.
#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    processing_delay: Duration,
}

impl PaymentProcessor {
    /// Create a processor with the default latency.
    pub fn new() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Override the simulated latency.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Create a payment intent.
    ///
    /// Validation happens before the simulated delay; cancelling the
    /// token during the delay aborts with [`PaymentError::Cancelled`]
    /// and no instructions are produced.
    pub async fn create_intent(
        &self,
        request: PaymentRequest,
        cancel: CancellationToken,
    ) -> Result<PaymentInstructions, PaymentError> {
        if !request.amount.is_positive() {
            return Err(PaymentError::InvalidAmount(request.amount.amount));
        }

        let bank = match request.method {
            PaymentMethod::BankTransfer => Some(request.bank.ok_or(PaymentError::MissingBank)?),
            PaymentMethod::Qris => None,
        };

        tracing::debug!(
            method = request.method.as_str(),
            amount = request.amount.amount,
            "processing payment intent"
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(method = request.method.as_str(), "payment intent cancelled");
                return Err(PaymentError::Cancelled);
            }
            _ = tokio::time::sleep(self.processing_delay) => {}
        }

        let instructions = match bank {
            Some(bank) => PaymentInstructions::bank_transfer(bank, request.amount),
            None => PaymentInstructions::qris(request.amount),
        };

        tracing::info!(
            method = request.method.as_str(),
            amount = request.amount.amount,
            "payment intent ready"
        );

        Ok(instructions)
    }
}

impl Default for PaymentProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_qris_intent() {
        let processor = PaymentProcessor::new();
        let instructions = processor
            .create_intent(PaymentRequest::qris(Money::idr(49950)), CancellationToken::new())
            .await
            .unwrap();

        assert!(matches!(instructions, PaymentInstructions::Qris { .. }));
        assert_eq!(instructions.amount(), Money::idr(49950));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bank_transfer_intent() {
        let processor = PaymentProcessor::new();
        let instructions = processor
            .create_intent(
                PaymentRequest::bank_transfer(Bank::Mandiri, Money::idr(45450)),
                CancellationToken::new(),
            )
            .await
            .unwrap();

        match instructions {
            PaymentInstructions::BankTransfer { bank, account_number, .. } => {
                assert_eq!(bank, Bank::Mandiri);
                assert_eq!(account_number, "87654321");
            }
            _ => panic!("expected bank transfer instructions"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transfer_without_bank_rejected() {
        let processor = PaymentProcessor::new();
        let request = PaymentRequest {
            method: PaymentMethod::BankTransfer,
            bank: None,
            amount: Money::idr(1000),
        };

        let err = processor
            .create_intent(request, CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, PaymentError::MissingBank);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_positive_amount_rejected() {
        let processor = PaymentProcessor::new();

        let err = processor
            .create_intent(PaymentRequest::qris(Money::idr(0)), CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, PaymentError::InvalidAmount(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_during_processing() {
        let processor = PaymentProcessor::new();
        let cancel = CancellationToken::new();

        let pending = tokio::spawn({
            let processor = processor.clone();
            let cancel = cancel.clone();
            async move {
                processor
                    .create_intent(PaymentRequest::qris(Money::idr(49950)), cancel)
                    .await
            }
        });

        // Cancel before the simulated latency elapses
        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();

        let result = pending.await.unwrap();
        assert_eq!(result.unwrap_err(), PaymentError::Cancelled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let processor = PaymentProcessor::new().with_processing_delay(Duration::from_millis(10));
        let start = tokio::time::Instant::now();

        processor
            .create_intent(PaymentRequest::qris(Money::idr(1000)), CancellationToken::new())
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(10));
    }
}
