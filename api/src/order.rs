//! Values derived from a pack and the wallet for the order summary.

use crate::amount::group_thousands;
use crate::amount::Amount;
use crate::config::CheckoutConfig;
use crate::pack::PackData;

/// Everything the dialog displays about the order, recomputed on each render.
///
/// No promo discounts, taxes or fees are modeled, so `total == subtotal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Amount,
    pub total: Amount,
    pub balance: Amount,
    /// `max(0, subtotal - balance)`
    pub amount_needed: Amount,
    pub has_enough_balance: bool,
    pub points_earned: u32,
}

impl OrderSummary {
    pub fn new(pack: &PackData, balance: Amount, points_earned: u32) -> Self {
        let subtotal = pack.price().times(pack.quantity());
        let total = subtotal;
        // A balance in another currency can't pay for anything.
        let amount_needed = subtotal.shortfall_from(&balance).unwrap_or(subtotal);
        let has_enough_balance = balance >= subtotal;

        Self {
            subtotal,
            total,
            balance,
            amount_needed,
            has_enough_balance,
            points_earned,
        }
    }

    /// Uses the wallet balance held in the currency selected for payment.
    pub fn for_pack(pack: &PackData, config: &CheckoutConfig) -> Self {
        let balance = config.wallet.get(config.currency);
        Self::new(pack, balance, config.points_per_purchase)
    }

    pub fn needs_funds(&self) -> bool {
        self.amount_needed.is_positive()
    }

    pub fn points_label(&self) -> String {
        format_points(self.points_earned)
    }
}

/// Points formatted for display, e.g. "+2,500".
pub fn format_points(points: u32) -> String {
    format!("+{}", group_thousands(points as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::POINTS_PER_PURCHASE;
    use crate::payment_currency::PaymentCurrency;
    use crate::wallet::WalletBalance;

    fn pack(price: i64, quantity: u32) -> PackData {
        let price = Amount::new_from_major(price, PaymentCurrency::Usdc);
        PackData::new("Booster Anamons Pack", price, quantity, "/packs/booster.png").unwrap()
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let summary = OrderSummary::for_pack(&pack(10, 3), &CheckoutConfig::default());
        assert_eq!(summary.subtotal.to_string_with_symbol(), "$30.00");
        assert_eq!(summary.total, summary.subtotal);
    }

    #[test]
    fn enough_balance_needs_nothing() {
        let summary = OrderSummary::for_pack(&pack(10, 3), &CheckoutConfig::default());
        assert!(summary.has_enough_balance);
        assert!(!summary.needs_funds());
        assert_eq!(summary.amount_needed.as_minor_units(), 0);
    }

    #[test]
    fn short_balance_reports_the_gap() {
        let summary = OrderSummary::for_pack(&pack(50, 3), &CheckoutConfig::default());
        assert!(!summary.has_enough_balance);
        assert!(summary.needs_funds());
        assert_eq!(summary.amount_needed.to_string_with_symbol(), "$50.00");
    }

    #[test]
    fn exact_balance_is_enough() {
        let summary = OrderSummary::for_pack(&pack(25, 4), &CheckoutConfig::default());
        assert!(summary.has_enough_balance);
        assert!(!summary.needs_funds());
    }

    #[test]
    fn empty_wallet_needs_the_full_subtotal() {
        let config = CheckoutConfig {
            wallet: WalletBalance::default(),
            ..Default::default()
        };
        let summary = OrderSummary::for_pack(&pack(10, 2), &config);
        assert_eq!(summary.amount_needed, summary.subtotal);
    }

    #[test]
    fn balance_is_read_in_the_selected_currency() {
        let config = CheckoutConfig {
            currency: PaymentCurrency::Sol,
            wallet: WalletBalance::mock().with(Amount::new_from_major(1_000, PaymentCurrency::Sol)),
            ..Default::default()
        };
        let summary = OrderSummary::for_pack(&pack(10, 3), &config);
        assert!(summary.balance.currency().is_sol());
        assert!(!summary.has_enough_balance);
        assert_eq!(summary.amount_needed, summary.subtotal);
    }

    #[test]
    fn format_points_groups_thousands() {
        assert_eq!(format_points(0), "+0");
        assert_eq!(format_points(2500), "+2,500");
        assert_eq!(format_points(1_000_000), "+1,000,000");
    }

    #[test]
    fn points_come_from_config() {
        let summary = OrderSummary::for_pack(&pack(10, 1), &CheckoutConfig::default());
        assert_eq!(summary.points_earned, POINTS_PER_PURCHASE);
        assert_eq!(summary.points_label(), "+2,500");
    }
}
