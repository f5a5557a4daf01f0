//! Payment instructions shown to the customer.

use bubble_commerce::checkout::Bank;
use bubble_commerce::money::Money;
use rand::Rng;

/// Account name shown for bank transfers.
pub const ACCOUNT_NAME: &str = "PT BubblePi";

/// Hours a QRIS code stays valid.
pub const QRIS_EXPIRY_HOURS: u64 = 24;

/// What the customer must do to complete payment.
///
/// The storefront renders these verbatim; completion itself is
/// confirmed by the customer, not detected automatically.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentInstructions {
    /// Scan a QRIS code with any supporting payment app.
    Qris {
        /// Order reference encoded in the code.
        order_ref: String,
        /// Amount to pay.
        amount: Money,
        /// Hours until the code expires.
        expires_in_hours: u64,
    },
    /// Transfer the amount to one of our virtual accounts.
    BankTransfer {
        /// Bank to transfer to.
        bank: Bank,
        /// Our account number at that bank.
        account_number: String,
        /// Account holder name.
        account_name: String,
        /// Amount to transfer.
        amount: Money,
        /// Transfer reference to include in the description.
        reference: String,
    },
}

impl PaymentInstructions {
    /// Build QRIS instructions for an amount.
    pub fn qris(amount: Money) -> Self {
        Self::Qris {
            order_ref: generate_order_ref(),
            amount,
            expires_in_hours: QRIS_EXPIRY_HOURS,
        }
    }

    /// Build bank transfer instructions for an amount.
    pub fn bank_transfer(bank: Bank, amount: Money) -> Self {
        Self::BankTransfer {
            bank,
            account_number: bank.account_number().to_string(),
            account_name: ACCOUNT_NAME.to_string(),
            amount,
            reference: generate_transfer_ref(),
        }
    }

    /// The amount the customer must pay.
    pub fn amount(&self) -> Money {
        match self {
            PaymentInstructions::Qris { amount, .. } => *amount,
            PaymentInstructions::BankTransfer { amount, .. } => *amount,
        }
    }
}

/// Generate an order reference like "ORD-042318".
fn generate_order_ref() -> String {
    let mut rng = rand::thread_rng();
    format!("ORD-{:06}", rng.gen_range(0..1_000_000))
}

/// Generate a transfer reference like "BP-713550".
fn generate_transfer_ref() -> String {
    let mut rng = rand::thread_rng();
    format!("BP-{:06}", rng.gen_range(0..1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qris_instructions() {
        let instructions = PaymentInstructions::qris(Money::idr(49950));
        match &instructions {
            PaymentInstructions::Qris {
                order_ref,
                expires_in_hours,
                ..
            } => {
                assert!(order_ref.starts_with("ORD-"));
                assert_eq!(order_ref.len(), "ORD-".len() + 6);
                assert_eq!(*expires_in_hours, QRIS_EXPIRY_HOURS);
            }
            _ => panic!("expected QRIS instructions"),
        }
        assert_eq!(instructions.amount(), Money::idr(49950));
    }

    #[test]
    fn test_bank_transfer_instructions() {
        let instructions = PaymentInstructions::bank_transfer(Bank::Bca, Money::idr(49950));
        match instructions {
            PaymentInstructions::BankTransfer {
                bank,
                account_number,
                account_name,
                reference,
                ..
            } => {
                assert_eq!(bank, Bank::Bca);
                assert_eq!(account_number, "12345678");
                assert_eq!(account_name, ACCOUNT_NAME);
                assert!(reference.starts_with("BP-"));
            }
            _ => panic!("expected bank transfer instructions"),
        }
    }
}
