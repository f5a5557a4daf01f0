//! Cart totals calculation.

use crate::cart::AppliedPromo;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// VAT rate applied to every order.
pub const TAX_RATE_PERCENT: f64 = 11.0;

/// Totals breakdown for a cart or checkout session.
///
/// Fixed-point contract: `tax = subtotal * 11%`, `discount = subtotal *
/// promo percent` (zero without a promo), `total = subtotal + tax -
/// discount`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Subtotal of all line items.
    pub subtotal: Money,
    /// Tax amount.
    pub tax: Money,
    /// Promo discount amount.
    pub discount: Money,
    /// Final total.
    pub total: Money,
}

impl CartTotals {
    /// Compute totals from a subtotal and an optional applied promo.
    pub fn compute(subtotal: Money, promo: Option<&AppliedPromo>) -> Result<Self, CommerceError> {
        let tax = subtotal.percentage(TAX_RATE_PERCENT);
        let discount = match promo {
            Some(p) => subtotal.percentage(p.percent_off),
            None => Money::zero(subtotal.currency),
        };
        let total = subtotal
            .try_add(&tax)
            .and_then(|t| t.try_subtract(&discount))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            tax,
            discount,
            total,
        })
    }

    /// Check if a promo discount is included.
    pub fn has_discount(&self) -> bool {
        self.discount.is_positive()
    }
}
