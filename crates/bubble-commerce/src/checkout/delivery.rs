//! Account delivery methods.
//!
//! Purchased account credentials are delivered out-of-band, via email or
//! WhatsApp. The contact info shape depends on the chosen method and is
//! validated as a hard precondition of the shipping step.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Channel through which purchased account credentials are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryMethod {
    /// Send to an email address.
    Email,
    /// Send via WhatsApp message.
    Whatsapp,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Email => "email",
            DeliveryMethod::Whatsapp => "whatsapp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryMethod::Email => "Email",
            DeliveryMethod::Whatsapp => "WhatsApp",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "email" => Some(DeliveryMethod::Email),
            "whatsapp" => Some(DeliveryMethod::Whatsapp),
            _ => None,
        }
    }

    /// Validate contact info against this method's expected shape.
    ///
    /// Email must look like `local@domain.tld`; WhatsApp numbers are
    /// digits only in international format without `+` (e.g.,
    /// `6281234567890`).
    pub fn validate_contact(&self, contact: &str) -> Result<(), CommerceError> {
        let contact = contact.trim();
        if contact.is_empty() {
            return Err(self.invalid_contact("contact information is required"));
        }

        match self {
            DeliveryMethod::Email => {
                let mut parts = contact.splitn(2, '@');
                let local = parts.next().unwrap_or("");
                let domain = parts.next().unwrap_or("");
                let domain_ok = domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.');
                if local.is_empty() || !domain_ok || contact.chars().any(char::is_whitespace) {
                    return Err(self.invalid_contact("expected an address like your@email.com"));
                }
            }
            DeliveryMethod::Whatsapp => {
                if !contact.chars().all(|c| c.is_ascii_digit()) {
                    return Err(
                        self.invalid_contact("digits only, without + or spaces (628XXXXXXXXXX)")
                    );
                }
                if !contact.starts_with("62") {
                    return Err(self.invalid_contact("number must start with country code 62"));
                }
                if contact.len() < 10 || contact.len() > 15 {
                    return Err(self.invalid_contact("number must be 10-15 digits"));
                }
            }
        }
        Ok(())
    }

    fn invalid_contact(&self, reason: &str) -> CommerceError {
        CommerceError::InvalidContactInfo {
            method: self.display_name().to_string(),
            reason: reason.to_string(),
        }
    }
}
