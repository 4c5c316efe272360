//! Defines the currencies a pack can be paid with.

use serde::Deserialize;
use serde::Serialize;

/// A currency accepted at checkout, containing its code, symbol, and formatting rules.
///
/// USDC is the default and the only option the payment pane offers today.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentCurrency {
    #[default]
    #[strum(serialize = "USDC")]
    #[serde(rename = "USDC")]
    Usdc,
    #[strum(serialize = "SOL")]
    #[serde(rename = "SOL")]
    Sol,
}

impl PaymentCurrency {
    /// Returns the number of decimal digits used by the currency.
    ///
    /// USDC is shown in cents. SOL is counted in lamports (9 decimals).
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Usdc => 2,
            Self::Sol => 9,
        }
    }

    /// Returns the graphical symbol used when displaying amounts (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usdc => "$",
            Self::Sol => "◎",
        }
    }

    /// Returns the ticker code for the currency (e.g., "USDC").
    /// This is handled automatically by the `strum::IntoStaticStr` derive macro.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Short label naming the chain the currency settles on.
    pub fn network_label(&self) -> &'static str {
        match self {
            Self::Usdc | Self::Sol => "on Solana",
        }
    }
}
