//! Money type for representing monetary values.
//!
//! Uses integer minor-unit representation to avoid floating-point
//! precision issues that plague monetary calculations. Catalog prices
//! are rupiah amounts (IDR has no minor unit), so `Money::new(25000,
//! Currency::IDR)` is Rp25.000.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    IDR,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::IDR => "Rp",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IDR" => Some(Currency::IDR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (whole rupiah
/// for IDR, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a rupiah amount.
    pub fn idr(amount: i64) -> Self {
        Self::new(amount, Currency::IDR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Format as a display string (e.g., "Rp25.000" or "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            let sign = if self.amount < 0 { "-" } else { "" };
            format!(
                "{}{}{}",
                sign,
                self.currency.symbol(),
                group_thousands(self.amount.unsigned_abs())
            )
        } else {
            let divisor = 10_i64.pow(places);
            let decimal = self.amount as f64 / divisor as f64;
            format!(
                "{}{:.places$}",
                self.currency.symbol(),
                decimal,
                places = places as usize
            )
        }
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't
    /// match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.checked_add(other.amount)?,
            self.currency,
        ))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.checked_sub(other.amount)?,
            self.currency,
        ))
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        Some(Money::new(self.amount.checked_mul(factor)?, self.currency))
    }

    /// Calculate a percentage of this amount, rounded to the nearest unit.
    pub fn percentage(&self, percent: f64) -> Money {
        let new_amount = (self.amount as f64 * percent / 100.0).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Sum an iterator of Money values, returning None on currency
    /// mismatch or overflow.
    pub fn try_sum<'a>(
        iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.try_multiply(factor)
            .expect("Overflow in money multiplication")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group digits with '.' separators, Indonesian style (25000 -> "25.000").
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::idr(25000);
        assert_eq!(m.amount, 25000);
        assert_eq!(m.currency, Currency::IDR);
    }

    #[test]
    fn test_money_display_idr() {
        assert_eq!(Money::idr(25000).display(), "Rp25.000");
        assert_eq!(Money::idr(5000).display(), "Rp5.000");
        assert_eq!(Money::idr(110000).display(), "Rp110.000");
        assert_eq!(Money::idr(999).display(), "Rp999");
        assert_eq!(Money::idr(-4500).display(), "-Rp4.500");
    }

    #[test]
    fn test_money_display_usd() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::idr(25000);
        let b = Money::idr(20000);
        assert_eq!((a + b).amount, 45000);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::idr(49950);
        let b = Money::idr(4500);
        assert_eq!(a.subtract(&b).amount, 45450);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::idr(10000);
        assert_eq!((m * 2).amount, 20000);
    }

    #[test]
    fn test_money_percentage() {
        let subtotal = Money::idr(45000);
        assert_eq!(subtotal.percentage(11.0).amount, 4950);
        assert_eq!(subtotal.percentage(10.0).amount, 4500);
    }

    #[test]
    fn test_money_percentage_rounds() {
        // 11% of 95 is 10.45, rounds to 10
        assert_eq!(Money::idr(95).percentage(11.0).amount, 10);
        // 11% of 50 is 5.5, rounds half up to 6
        assert_eq!(Money::idr(50).percentage(11.0).amount, 6);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let idr = Money::idr(1000);
        let usd = Money::new(1000, Currency::USD);
        assert!(idr.try_add(&usd).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::idr(i64::MAX);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [Money::idr(25000), Money::idr(20000)];
        let sum = Money::try_sum(values.iter(), Currency::IDR).unwrap();
        assert_eq!(sum.amount, 45000);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch_panics() {
        let idr = Money::idr(1000);
        let usd = Money::new(1000, Currency::USD);
        let _ = idr + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("idr"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
