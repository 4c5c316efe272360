//! The built-in list of packs offered by the store screen.

use dioxus_logger::tracing;
use serde::Deserialize;
use thiserror::Error;

use crate::pack::PackData;
use crate::pack::PackError;
use crate::payment_currency::PaymentCurrency;

const DEFAULT_CATALOG: &str = include_str!("../data/packs.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("malformed pack catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("pack '{name}' is invalid: {source}")]
    Pack {
        name: String,
        #[source]
        source: PackError,
    },
}

/// A catalog row as written in JSON. Prices are decimal strings so they never pass through a float.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    price: String,
    quantity: u32,
    image: String,
    #[serde(default)]
    currency: PaymentCurrency,
}

/// Parses a JSON array of catalog entries into validated packs.
pub fn parse_catalog(json: &str) -> Result<Vec<PackData>, CatalogError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;

    let packs = entries
        .into_iter()
        .map(|entry| {
            PackData::with_price_str(
                entry.name.clone(),
                &entry.price,
                entry.currency,
                entry.quantity,
                entry.image,
            )
            .map_err(|source| CatalogError::Pack {
                name: entry.name,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!("loaded {} packs from catalog", packs.len());
    Ok(packs)
}

/// The catalog compiled into the binary.
pub fn default_catalog() -> Result<Vec<PackData>, CatalogError> {
    parse_catalog(DEFAULT_CATALOG).inspect_err(|e| tracing::warn!("default catalog: {e}"))
}
