//! The purchasable pack descriptor handed to the checkout dialog.

use thiserror::Error;

use crate::amount::Amount;
use crate::amount::ParseAmountError;
use crate::payment_currency::PaymentCurrency;

const LONG_PACK_SUFFIX: &str = " Anamons Pack";
const SHORT_PACK_SUFFIX: &str = " Pack";

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum PackError {
    #[error("pack quantity must be at least 1")]
    ZeroQuantity,
    #[error("invalid pack price: {0}")]
    Price(#[from] ParseAmountError),
}

/// A purchasable bundle: name, unit price, quantity and the image shown for it.
///
/// Owned by the caller and passed down to the dialog unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackData {
    name: String,
    price: Amount,
    quantity: u32,
    image: String,
}

impl PackData {
    pub fn new(
        name: impl Into<String>,
        price: Amount,
        quantity: u32,
        image: impl Into<String>,
    ) -> Result<Self, PackError> {
        if quantity == 0 {
            return Err(PackError::ZeroQuantity);
        }
        Ok(Self {
            name: name.into(),
            price,
            quantity,
            image: image.into(),
        })
    }

    /// Like [`PackData::new`], parsing the price from a decimal string.
    pub fn with_price_str(
        name: impl Into<String>,
        price: &str,
        currency: PaymentCurrency,
        quantity: u32,
        image: impl Into<String>,
    ) -> Result<Self, PackError> {
        let price = Amount::new_from_str(price, currency)?;
        Self::new(name, price, quantity, image)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Amount {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Name used in the order summary row: "Booster Anamons Pack" becomes "Booster Pack".
    pub fn short_name(&self) -> String {
        self.name.replace(LONG_PACK_SUFFIX, SHORT_PACK_SUFFIX)
    }

    /// "1 item" or "N items".
    pub fn item_label(&self) -> String {
        let plural = if self.quantity > 1 { "s" } else { "" };
        format!("{} item{}", self.quantity, plural)
    }
}
