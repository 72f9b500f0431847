//! Bagel pricing: base price plus selected toppings, per vendor.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{validate_price, CoreError, Result};

/// A bagel vendor's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagelVendor {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    /// Topping name (normalized) to its surcharge.
    pub toppings: BTreeMap<String, f64>,
}

/// Validated vendor insert payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBagelVendor {
    pub name: String,
    pub base_price: f64,
    pub toppings: BTreeMap<String, f64>,
}

impl NewBagelVendor {
    /// # Errors
    /// Rejects a blank name, a non-positive base price, and negative or
    /// non-finite topping prices. Free toppings (`0.0`) are allowed.
    pub fn new<I, K>(name: impl Into<String>, base_price: f64, toppings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(CoreError::InvalidInput("vendor name is required".to_owned()));
        }
        let base_price = validate_price(base_price)?;
        let mut menu = BTreeMap::new();
        for (topping, price) in toppings {
            let key = normalize_topping(topping.as_ref());
            if key.is_empty() {
                return Err(CoreError::InvalidInput("topping name is required".to_owned()));
            }
            if !price.is_finite() || price < 0.0 {
                return Err(CoreError::InvalidInput(format!("invalid price for topping {key}")));
            }
            menu.insert(key, price);
        }
        Ok(Self { name, base_price, toppings: menu })
    }
}

impl BagelVendor {
    #[must_use]
    pub fn from_new(id: String, new: NewBagelVendor) -> Self {
        Self { id, name: new.name, base_price: new.base_price, toppings: new.toppings }
    }
}

/// Price of one vendor's bagel with the requested toppings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BagelQuote {
    pub vendor_id: String,
    pub vendor: String,
    pub base_price: f64,
    pub toppings: Vec<String>,
    pub total: f64,
}

/// Lowercased, trimmed, inner whitespace collapsed to `_`.
#[must_use]
pub fn normalize_topping(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase()
}

/// Normalizes and deduplicates a topping selection, dropping blanks.
#[must_use]
pub fn normalize_selection<S: AsRef<str>>(selected: &[S]) -> Vec<String> {
    selected
        .iter()
        .map(|s| normalize_topping(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Base price plus the surcharge of every selected topping.
///
/// # Errors
/// `CoreError::UnknownTopping` if the vendor does not offer a selected topping.
pub fn quote<S: AsRef<str>>(vendor: &BagelVendor, selected: &[S]) -> Result<BagelQuote> {
    let toppings = normalize_selection(selected);
    let mut total = vendor.base_price;
    for topping in &toppings {
        let surcharge = vendor.toppings.get(topping).ok_or_else(|| CoreError::UnknownTopping {
            vendor: vendor.name.clone(),
            topping: topping.clone(),
        })?;
        total += surcharge;
    }
    Ok(BagelQuote {
        vendor_id: vendor.id.clone(),
        vendor: vendor.name.clone(),
        base_price: vendor.base_price,
        toppings,
        total,
    })
}

/// Quotes every vendor that offers all selected toppings, cheapest first.
#[must_use]
pub fn quote_all<S: AsRef<str>>(vendors: &[BagelVendor], selected: &[S]) -> Vec<BagelQuote> {
    let mut quotes: Vec<BagelQuote> = vendors
        .iter()
        .filter_map(|vendor| match quote(vendor, selected) {
            Ok(q) => Some(q),
            Err(e) => {
                tracing::debug!(vendor = %vendor.name, error = %e, "vendor skipped for quote");
                None
            },
        })
        .collect();
    quotes.sort_by(|a, b| a.total.total_cmp(&b.total));
    quotes
}
