//! Checkout flow state machine.

use crate::cart::{AppliedPromo, CartTotals};
use crate::checkout::{Bank, DeliveryMethod, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::{CartId, CheckoutId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Delivery method and contact info.
    Shipping,
    /// Payment method selection.
    Payment,
    /// Order confirmed.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }
}

/// Checkout session state.
///
/// Ephemeral: owned by one checkout attempt, never persisted across
/// reloads, discarded on completion or navigation away.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Unique checkout identifier.
    pub id: CheckoutId,
    /// Associated cart ID.
    pub cart_id: CartId,
    /// Current step.
    pub step: CheckoutStep,
    /// Completed steps.
    pub completed_steps: Vec<CheckoutStep>,
    /// Chosen delivery method.
    pub delivery_method: Option<DeliveryMethod>,
    /// Contact info, validated against the delivery method on set.
    pub contact_info: Option<String>,
    /// Chosen payment method.
    pub payment_method: Option<PaymentMethod>,
    /// Selected bank (required for bank transfer).
    pub selected_bank: Option<Bank>,
    /// Applied promo carried over from the cart.
    pub promo: Option<AppliedPromo>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl CheckoutFlow {
    /// Create a new checkout flow for a cart.
    pub fn new(cart_id: CartId) -> Self {
        let now = current_timestamp();
        Self {
            id: CheckoutId::generate(),
            cart_id,
            step: CheckoutStep::Shipping,
            completed_steps: Vec::new(),
            delivery_method: None,
            contact_info: None,
            payment_method: None,
            selected_bank: None,
            promo: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the delivery method and contact info.
    ///
    /// The contact info must match the method's expected shape; a
    /// validation failure leaves the flow unchanged.
    pub fn set_delivery(
        &mut self,
        method: DeliveryMethod,
        contact: impl Into<String>,
    ) -> Result<(), CommerceError> {
        let contact = contact.into();
        method.validate_contact(&contact)?;
        self.delivery_method = Some(method);
        self.contact_info = Some(contact.trim().to_string());
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Set the payment method. Selecting QRIS clears any selected bank.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
        if !method.requires_bank() {
            self.selected_bank = None;
        }
        self.updated_at = current_timestamp();
    }

    /// Select a bank for bank transfer.
    pub fn select_bank(&mut self, bank: Bank) {
        self.selected_bank = Some(bank);
        self.updated_at = current_timestamp();
    }

    /// Carry an applied promo over from the cart.
    pub fn apply_promo(&mut self, promo: AppliedPromo) {
        self.promo = Some(promo);
        self.updated_at = current_timestamp();
    }

    /// Check if the flow can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Shipping => true,
            CheckoutStep::Payment => {
                self.delivery_method.is_some() && self.contact_info.is_some()
            }
            CheckoutStep::Confirmation => {
                self.can_advance_to(CheckoutStep::Payment)
                    && match self.payment_method {
                        Some(method) => !method.requires_bank() || self.selected_bank.is_some(),
                        None => false,
                    }
            }
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Shipping => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Confirmation,
            CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "confirmation".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(CommerceError::CheckoutIncomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        if !self.completed_steps.contains(&self.step) {
            self.completed_steps.push(self.step);
        }
        self.step = next;
        self.updated_at = current_timestamp();

        Ok(next)
    }

    /// Go back to the previous step.
    ///
    /// Confirmation is terminal; Shipping has nowhere to go back to.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Shipping | CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: self.step.as_str().to_string(),
                    to: "back".to_string(),
                })
            }
            CheckoutStep::Payment => CheckoutStep::Shipping,
        };

        self.step = prev;
        self.updated_at = current_timestamp();

        Ok(prev)
    }

    /// Confirm the order after the customer reports payment.
    ///
    /// Only valid from the Payment step with a complete payment
    /// selection. On success the flow is complete; the caller is
    /// responsible for clearing the cart exactly once.
    pub fn confirm_payment(&mut self) -> Result<(), CommerceError> {
        if self.step != CheckoutStep::Payment {
            return Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str().to_string(),
                to: "confirmation".to_string(),
            });
        }
        self.advance()?;
        Ok(())
    }

    /// Get what's missing to advance to a step.
    fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            CheckoutStep::Shipping => {}
            CheckoutStep::Payment => {
                if self.delivery_method.is_none() {
                    missing.push("delivery method");
                }
                if self.contact_info.is_none() {
                    missing.push("contact info");
                }
            }
            CheckoutStep::Confirmation => {
                missing.extend(self.missing_for_step(CheckoutStep::Payment));
                match self.payment_method {
                    None => missing.push("payment method"),
                    Some(method) => {
                        if method.requires_bank() && self.selected_bank.is_none() {
                            missing.push("bank selection");
                        }
                    }
                }
            }
        }
        missing
    }

    /// Compute the session totals for a cart subtotal.
    pub fn totals(&self, subtotal: Money) -> Result<CartTotals, CommerceError> {
        CartTotals::compute(subtotal, self.promo.as_ref())
    }

    /// Check if the checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 3.0) * 100.0) as u8
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
