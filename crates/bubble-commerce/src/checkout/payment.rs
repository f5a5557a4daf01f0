//! Payment method selection types.

use serde::{Deserialize, Serialize};

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// QRIS code scanned with any supporting payment app.
    Qris,
    /// Transfer to one of our virtual accounts.
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "qris",
            PaymentMethod::BankTransfer => "bank_transfer",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "qris" => Some(PaymentMethod::Qris),
            "bank_transfer" => Some(PaymentMethod::BankTransfer),
            _ => None,
        }
    }

    /// Whether this method needs a bank selected before it can proceed.
    pub fn requires_bank(&self) -> bool {
        matches!(self, PaymentMethod::BankTransfer)
    }
}

/// Banks available for virtual-account transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bank {
    Bca,
    Mandiri,
    Bni,
    Bri,
}

impl Bank {
    /// All selectable banks, in display order.
    pub const ALL: [Bank; 4] = [Bank::Bca, Bank::Mandiri, Bank::Bni, Bank::Bri];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bank::Bca => "bca",
            Bank::Mandiri => "mandiri",
            Bank::Bni => "bni",
            Bank::Bri => "bri",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Bank::Bca => "BCA",
            Bank::Mandiri => "Mandiri",
            Bank::Bni => "BNI",
            Bank::Bri => "BRI",
        }
    }

    /// Our virtual account number at this bank.
    pub fn account_number(&self) -> &'static str {
        match self {
            Bank::Bca => "12345678",
            Bank::Mandiri => "87654321",
            Bank::Bni => "11223344",
            Bank::Bri => "55667788",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bca" => Some(Bank::Bca),
            "mandiri" => Some(Bank::Mandiri),
            "bni" => Some(Bank::Bni),
            "bri" => Some(Bank::Bri),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method() {
        assert!(PaymentMethod::BankTransfer.requires_bank());
        assert!(!PaymentMethod::Qris.requires_bank());
        assert_eq!(
            PaymentMethod::from_str("bank_transfer"),
            Some(PaymentMethod::BankTransfer)
        );
        assert_eq!(PaymentMethod::from_str("cash"), None);
    }

    #[test]
    fn test_bank_lookup() {
        assert_eq!(Bank::from_str("BCA"), Some(Bank::Bca));
        assert_eq!(Bank::Bca.account_number(), "12345678");
        assert_eq!(Bank::ALL.len(), 4);
    }
}
