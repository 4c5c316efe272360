//! Wallet balances, keyed by payment currency.

use std::collections::HashMap;

use crate::amount::Amount;
use crate::payment_currency::PaymentCurrency;

/// Balance the checkout shows until a real wallet integration exists.
pub const MOCK_USDC_BALANCE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletBalance(HashMap<PaymentCurrency, Amount>);

impl WalletBalance {
    /// A fixed, never-fetched balance of 100.00 USDC.
    pub fn mock() -> Self {
        let usdc = PaymentCurrency::Usdc;
        Self::default().with(Amount::new_from_major(MOCK_USDC_BALANCE, usdc))
    }

    /// Returns a copy holding `amount` under its own currency.
    pub fn with(mut self, amount: Amount) -> Self {
        self.0.insert(amount.currency(), amount);
        self
    }

    /// Balance held in `currency`. A currency the wallet doesn't hold reads as zero.
    pub fn get(&self, currency: PaymentCurrency) -> Amount {
        self.0
            .get(&currency)
            .copied()
            .unwrap_or_else(|| Amount::zero(currency))
    }
}
