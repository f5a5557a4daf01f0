//! Promo code registry.
//!
//! Replaces the single hardcoded code match with a registry carrying
//! activation windows and usage limits. Codes are percentage-only and do
//! not stack: applying a promo to a cart replaces any previous one.

use crate::error::CommerceError;
use crate::ids::PromoId;
use serde::{Deserialize, Serialize};

/// A promo code definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoCode {
    /// Unique promo identifier.
    pub id: PromoId,
    /// Code customers type in (matched case-insensitively).
    pub code: String,
    /// Percentage off the cart subtotal (0.0 - 100.0).
    pub percent_off: f64,
    /// Start of the activation window (Unix timestamp).
    pub starts_at: Option<i64>,
    /// End of the activation window (Unix timestamp).
    pub ends_at: Option<i64>,
    /// Maximum number of redemptions (None = unlimited).
    pub usage_limit: Option<i64>,
    /// Current redemption count.
    pub usage_count: i64,
    /// Whether the code is active.
    pub active: bool,
}

impl PromoCode {
    /// Create a new percentage promo code.
    ///
    /// `percent_off` is clamped into the valid 0 to 100 range.
    pub fn percent(code: impl Into<String>, percent_off: f64) -> Self {
        Self {
            id: PromoId::generate(),
            code: code.into(),
            percent_off: percent_off.clamp(0.0, 100.0),
            starts_at: None,
            ends_at: None,
            usage_limit: None,
            usage_count: 0,
            active: true,
        }
    }

    /// Add a usage limit.
    pub fn with_usage_limit(mut self, limit: i64) -> Self {
        self.usage_limit = Some(limit);
        self
    }

    /// Set an expiration timestamp.
    pub fn expires_at(mut self, timestamp: i64) -> Self {
        self.ends_at = Some(timestamp);
        self
    }

    /// Set an activation timestamp.
    pub fn active_from(mut self, timestamp: i64) -> Self {
        self.starts_at = Some(timestamp);
        self
    }

    /// Check if the code is inside its activation window and under its
    /// usage limit.
    pub fn is_valid(&self) -> bool {
        self.active && !self.is_expired() && !self.is_exhausted() && !self.is_pending()
    }

    /// Check if the code's window has not opened yet.
    pub fn is_pending(&self) -> bool {
        self.starts_at
            .map(|starts| current_timestamp() < starts)
            .unwrap_or(false)
    }

    /// Check if the code's window has closed.
    pub fn is_expired(&self) -> bool {
        self.ends_at
            .map(|ends| current_timestamp() > ends)
            .unwrap_or(false)
    }

    /// Check if the usage limit has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.usage_limit
            .map(|limit| self.usage_count >= limit)
            .unwrap_or(false)
    }

    /// Record a redemption.
    pub fn record_usage(&mut self) {
        self.usage_count += 1;
    }
}

/// A promo that has been applied to a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedPromo {
    /// The code that was redeemed.
    pub code: String,
    /// Percentage off the subtotal.
    pub percent_off: f64,
}

impl AppliedPromo {
    /// Create an applied promo.
    ///
    /// `percent_off` is clamped into the valid 0 to 100 range.
    pub fn new(code: impl Into<String>, percent_off: f64) -> Self {
        Self {
            code: code.into(),
            percent_off: percent_off.clamp(0.0, 100.0),
        }
    }
}

/// Registry of known promo codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PromoRegistry {
    codes: Vec<PromoCode>,
}

impl PromoRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a promo code.
    pub fn register(&mut self, code: PromoCode) {
        self.codes.push(code);
    }

    /// Look up a code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<&PromoCode> {
        self.codes.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Redeem a code.
    ///
    /// On success the usage count is recorded and an [`AppliedPromo`] is
    /// returned for the cart. Rejections are user-facing errors, never
    /// fatal: unknown/inactive, expired/not-yet-active, or exhausted.
    pub fn redeem(&mut self, code: &str) -> Result<AppliedPromo, CommerceError> {
        let promo = self
            .codes
            .iter_mut()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| CommerceError::InvalidPromoCode(code.to_string()))?;

        if !promo.active {
            return Err(CommerceError::InvalidPromoCode(promo.code.clone()));
        }
        if promo.is_expired() || promo.is_pending() {
            return Err(CommerceError::PromoExpired(promo.code.clone()));
        }
        if promo.is_exhausted() {
            return Err(CommerceError::PromoUsageLimitReached(promo.code.clone()));
        }

        promo.record_usage();
        Ok(AppliedPromo::new(promo.code.clone(), promo.percent_off))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PromoRegistry {
        let mut registry = PromoRegistry::new();
        registry.register(PromoCode::percent("diskon10", 10.0));
        registry
    }

    #[test]
    fn test_redeem_known_code() {
        let mut registry = registry();
        let applied = registry.redeem("diskon10").unwrap();
        assert_eq!(applied.code, "diskon10");
        assert_eq!(applied.percent_off, 10.0);
    }

    #[test]
    fn test_redeem_is_case_insensitive() {
        let mut registry = registry();
        assert!(registry.redeem("DISKON10").is_ok());
    }

    #[test]
    fn test_redeem_unknown_code() {
        let mut registry = registry();
        assert!(matches!(
            registry.redeem("nope"),
            Err(CommerceError::InvalidPromoCode(_))
        ));
    }

    #[test]
    fn test_redeem_records_usage() {
        let mut registry = registry();
        registry.redeem("diskon10").unwrap();
        assert_eq!(registry.get("diskon10").unwrap().usage_count, 1);
    }

    #[test]
    fn test_usage_limit() {
        let mut registry = PromoRegistry::new();
        registry.register(PromoCode::percent("once", 5.0).with_usage_limit(1));

        assert!(registry.redeem("once").is_ok());
        assert!(matches!(
            registry.redeem("once"),
            Err(CommerceError::PromoUsageLimitReached(_))
        ));
    }

    #[test]
    fn test_expired_code() {
        let mut registry = PromoRegistry::new();
        registry.register(PromoCode::percent("old", 10.0).expires_at(1));

        assert!(matches!(
            registry.redeem("old"),
            Err(CommerceError::PromoExpired(_))
        ));
    }

    #[test]
    fn test_not_yet_active_code() {
        let mut registry = PromoRegistry::new();
        registry.register(PromoCode::percent("soon", 10.0).active_from(i64::MAX));

        assert!(matches!(
            registry.redeem("soon"),
            Err(CommerceError::PromoExpired(_))
        ));
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(PromoCode::percent("big", 150.0).percent_off, 100.0);
        assert_eq!(PromoCode::percent("neg", -5.0).percent_off, 0.0);
        assert_eq!(AppliedPromo::new("big", 150.0).percent_off, 100.0);
    }

    #[test]
    fn test_clamped_promo_cannot_inflate_totals() {
        let mut registry = PromoRegistry::new();
        registry.register(PromoCode::percent("everything", 500.0));

        let applied = registry.redeem("everything").unwrap();
        let totals =
            crate::cart::CartTotals::compute(crate::money::Money::idr(45000), Some(&applied))
                .unwrap();
        // At most the full subtotal is discounted
        assert_eq!(totals.discount, crate::money::Money::idr(45000));
        assert!(!totals.total.is_negative());
    }

    #[test]
    fn test_inactive_code() {
        let mut registry = PromoRegistry::new();
        let mut code = PromoCode::percent("off", 10.0);
        code.active = false;
        registry.register(code);

        assert!(matches!(
            registry.redeem("off"),
            Err(CommerceError::InvalidPromoCode(_))
        ));
    }
}
