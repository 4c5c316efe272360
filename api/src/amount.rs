//! Provides a safe, self-contained type for representing payment amounts.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::payment_currency::PaymentCurrency;

/// An error that can occur when parsing a string into an `Amount`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string has more decimal places than the currency supports (e.g., "1.234").
    #[error("too many decimal places for the currency")]
    TooManyDecimals,
}

/// Represents a monetary value in a specific payment currency.
///
/// Internally, the amount is stored as a signed 64-bit integer in the currency's
/// smallest unit (e.g., cents for USDC) to prevent floating-point inaccuracies.
/// The default `Display` implementation formats this as a plain numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Amount {
    amount: i64,
    currency: PaymentCurrency,
}

impl Amount {
    // --- Getters ---

    /// Returns the currency of the amount.
    pub fn currency(&self) -> PaymentCurrency {
        self.currency
    }

    /// Returns the raw amount in the currency's smallest unit (e.g., cents).
    pub fn as_minor_units(&self) -> i64 {
        self.amount
    }

    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    // --- Constructors ---

    pub fn zero(currency: PaymentCurrency) -> Self {
        Self::new_from_minor(0, currency)
    }

    /// Creates a new `Amount` from whole major units (e.g., dollars).
    ///
    /// # Example
    /// ```
    /// # use api::amount::Amount;
    /// # use api::payment_currency::PaymentCurrency;
    /// let amount = Amount::new_from_major(100, PaymentCurrency::Usdc);
    /// assert_eq!(amount.as_minor_units(), 10000);
    /// ```
    pub fn new_from_major(major: i64, currency: PaymentCurrency) -> Self {
        let multiplier = 10_i64.pow(currency.decimals() as u32);
        Self {
            amount: major.saturating_mul(multiplier),
            currency,
        }
    }

    /// Creates a new `Amount` directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// # use api::amount::Amount;
    /// # use api::payment_currency::PaymentCurrency;
    /// // 12345 cents represents $123.45
    /// let amount = Amount::new_from_minor(12345, PaymentCurrency::Usdc);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn new_from_minor(amount: i64, currency: PaymentCurrency) -> Self {
        Self { amount, currency }
    }

    /// Creates a new `Amount` by parsing a decimal string such as "10", "10.5" or "10.50".
    ///
    /// Returns an error if the string is not a valid number or has too many
    /// decimal places for the given currency.
    pub fn new_from_str(s: &str, currency: PaymentCurrency) -> Result<Self, ParseAmountError> {
        let decimals = currency.decimals() as u32;
        let s = s.trim();

        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseAmountError::InvalidFormat);
        }

        if minor_str.len() > decimals as usize {
            return Err(ParseAmountError::TooManyDecimals);
        }

        // `i64::from_str` accepts a leading '+', which we don't.
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(major_str) || !all_digits(minor_str) {
            return Err(ParseAmountError::InvalidFormat);
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<i64>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
        };

        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<i64>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
        };

        let scaling_factor = 10_i64.pow(decimals - minor_str.len() as u32);
        let scaled_minor_units = minor_units
            .checked_mul(scaling_factor)
            .ok_or(ParseAmountError::InvalidFormat)?;

        let multiplier = 10_i64.pow(decimals);
        let mut total_minor_units = major_units
            .checked_mul(multiplier)
            .ok_or(ParseAmountError::InvalidFormat)?
            .checked_add(scaled_minor_units)
            .ok_or(ParseAmountError::InvalidFormat)?;

        if is_negative {
            total_minor_units = -total_minor_units;
        }

        Ok(Self::new_from_minor(total_minor_units, currency))
    }

    // --- Arithmetic ---

    /// Multiplies a unit price by a quantity, saturating instead of overflowing.
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount.saturating_mul(quantity as i64),
            currency: self.currency,
        }
    }

    /// Checked subtraction. Returns `None` if currencies mismatch or if subtraction overflows.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        if self.currency != rhs.currency {
            return None;
        }
        self.amount.checked_sub(rhs.amount).map(|new_amount| Self {
            amount: new_amount,
            currency: self.currency,
        })
    }

    /// Returns `self - rhs`, floored at zero. Mismatched currencies yield `None`.
    pub fn shortfall_from(&self, rhs: &Self) -> Option<Self> {
        self.checked_sub(rhs).map(|diff| Self {
            amount: diff.amount.max(0),
            currency: self.currency,
        })
    }

    // --- Display Methods ---

    /// Formats the amount the way en-US currency formatting does (e.g., "$1,234.50").
    pub fn to_string_with_symbol(&self) -> String {
        let decimals = self.currency.decimals() as u32;
        let divisor = 10_u64.pow(decimals);
        let abs = self.amount.unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };

        let major = group_thousands(abs / divisor);
        if decimals == 0 {
            return format!("{}{}{}", sign, self.currency.symbol(), major);
        }
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.currency.symbol(),
            major,
            abs % divisor,
            width = decimals as usize
        )
    }

    /// Formats the amount with its currency code (e.g., "25.34 USDC").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Inserts comma separators every three digits (e.g., 2500 becomes "2,500").
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Implements the default `Display` trait to format the amount as a numeric string (e.g., "25.34").
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as u32;

        if decimals == 0 {
            return write!(f, "{}", self.amount);
        }

        let divisor = 10_u64.pow(decimals);
        let abs = self.amount.unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };

        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            abs / divisor,
            abs % divisor,
            width = decimals as usize
        )
    }
}

/// Amounts in different currencies are unordered.
impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC: PaymentCurrency = PaymentCurrency::Usdc;

    #[test]
    fn parses_decimal_strings() {
        assert_eq!(Amount::new_from_str("10", USDC).unwrap().as_minor_units(), 1000);
        assert_eq!(Amount::new_from_str("10.5", USDC).unwrap().as_minor_units(), 1050);
        assert_eq!(Amount::new_from_str(".25", USDC).unwrap().as_minor_units(), 25);
        assert_eq!(Amount::new_from_str("-1.50", USDC).unwrap().as_minor_units(), -150);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(
            Amount::new_from_str("1.234", USDC),
            Err(ParseAmountError::TooManyDecimals)
        );
        for bad in ["", ".", "abc", "1.2.3", "+5", "1,000"] {
            assert_eq!(
                Amount::new_from_str(bad, USDC),
                Err(ParseAmountError::InvalidFormat),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn formats_with_symbol_and_grouping() {
        assert_eq!(Amount::new_from_major(30, USDC).to_string_with_symbol(), "$30.00");
        assert_eq!(Amount::new_from_minor(123450, USDC).to_string_with_symbol(), "$1,234.50");
        assert_eq!(Amount::new_from_minor(-5, USDC).to_string_with_symbol(), "-$0.05");
        assert_eq!(Amount::zero(USDC).to_string_with_symbol(), "$0.00");
    }

    #[test]
    fn plain_display_keeps_sign_of_small_negatives() {
        assert_eq!(Amount::new_from_minor(-50, USDC).to_string(), "-0.50");
        assert_eq!(Amount::new_from_minor(2534, USDC).to_string_with_code(), "25.34 USDC");
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2500), "2,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn times_multiplies_unit_price() {
        let price = Amount::new_from_major(10, USDC);
        assert_eq!(price.times(3), Amount::new_from_major(30, USDC));
        assert_eq!(
            Amount::new_from_minor(i64::MAX, USDC).times(2).as_minor_units(),
            i64::MAX
        );
    }

    #[test]
    fn shortfall_is_floored_at_zero() {
        let hundred = Amount::new_from_major(100, USDC);
        let thirty = Amount::new_from_major(30, USDC);
        assert_eq!(thirty.shortfall_from(&hundred), Some(Amount::zero(USDC)));
        assert_eq!(
            Amount::new_from_major(150, USDC).shortfall_from(&hundred),
            Some(Amount::new_from_major(50, USDC))
        );
    }

    #[test]
    fn amounts_compare_within_a_currency() {
        let a = Amount::new_from_major(1, USDC);
        let b = Amount::new_from_major(2, USDC);
        assert!(a < b);
        assert_eq!(b.checked_sub(&a), Some(a));
    }

    #[test]
    fn amounts_in_different_currencies_do_not_mix() {
        let usdc = Amount::new_from_major(1, USDC);
        let sol = Amount::new_from_major(1, PaymentCurrency::Sol);
        assert_eq!(usdc.partial_cmp(&sol), None);
        assert_eq!(usdc.shortfall_from(&sol), None);
    }
}
