//! Domain types for the pack store checkout: amounts, packs, wallet balances
//! and the order summary derived from them. Nothing here touches the UI.

pub mod amount;
pub mod catalog;
pub mod config;
pub mod order;
pub mod pack;
pub mod payment_currency;
pub mod wallet;
