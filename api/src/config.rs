//! Checkout settings shared by the store screen and the purchase dialog.

use crate::payment_currency::PaymentCurrency;
use crate::wallet::WalletBalance;

/// Points credited for every completed pack purchase.
pub const POINTS_PER_PURCHASE: u32 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// The currency pre-selected in the payment pane.
    pub currency: PaymentCurrency,
    pub points_per_purchase: u32,
    /// Stand-in for a wallet integration. Never mutated.
    pub wallet: WalletBalance,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            currency: PaymentCurrency::Usdc,
            points_per_purchase: POINTS_PER_PURCHASE,
            wallet: WalletBalance::mock(),
        }
    }
}
