//! Wallet domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The user's wallet.
///
/// The balance is never negative: the only mutation is a debit that
/// saturates at zero. There is no deposit flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: Decimal,
}

impl Wallet {
    /// Creates a wallet with the given starting balance.
    ///
    /// A negative starting balance is clamped to zero.
    pub fn new(balance: Decimal) -> Self {
        Self {
            balance: balance.max(Decimal::ZERO),
        }
    }

    /// The current balance.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Whether the wallet can cover the given amount.
    pub fn can_cover(&self, amount: Decimal) -> bool {
        amount <= self.balance
    }

    /// Debits the wallet, saturating at zero.
    pub fn debit(&mut self, amount: Decimal) {
        self.balance = (self.balance - amount).max(Decimal::ZERO);
    }
}
