use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CoreError, Result};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidCoordinate` if latitude is outside `[-90, 90]`,
    /// longitude is outside `[-180, 180]`, or either is NaN/infinite.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidCoordinate(format!("latitude {lat} out of range")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::InvalidCoordinate(format!("longitude {lon} out of range")));
        }
        Ok(Self { lat, lon })
    }
}

/// A recorded sandwich price at a location.
///
/// Records are append-only: a newer record at the same coordinate supersedes
/// the older one on the map, but both stay in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub price: f64,
    pub last_updated: DateTime<Utc>,
}

impl PriceRecord {
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate { lat: self.lat, lon: self.lon }
    }

    /// Materializes a validated insert with its storage identity.
    #[must_use]
    pub fn from_new(id: String, new: NewPriceRecord, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            address: new.address,
            lat: new.location.lat,
            lon: new.location.lon,
            price: new.price,
            last_updated,
        }
    }
}

/// Validated insert payload. Storage stamps `id` and `last_updated`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceRecord {
    pub name: String,
    pub address: String,
    pub location: Coordinate,
    pub price: f64,
}

impl NewPriceRecord {
    /// # Errors
    /// Returns an error when name or address is blank, or the price is not a
    /// finite number greater than zero.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coordinate,
        price: f64,
    ) -> Result<Self> {
        let name = name.into().trim().to_owned();
        let address = address.into().trim().to_owned();
        if name.is_empty() || address.is_empty() {
            return Err(CoreError::InvalidInput("name and address are required".to_owned()));
        }
        Ok(Self { name, address, location, price: validate_price(price)? })
    }
}

/// Checks that a price is finite and strictly positive.
///
/// # Errors
/// `InvalidPrice` for NaN/infinite values, `NonPositivePrice` for `<= 0`.
pub fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() {
        return Err(CoreError::InvalidPrice);
    }
    if price <= 0.0 {
        return Err(CoreError::NonPositivePrice);
    }
    Ok(price)
}

/// Parses a user-supplied price string.
///
/// # Errors
/// Same as [`validate_price`], plus `InvalidPrice` when the text is not a number.
pub fn parse_price(raw: &str) -> Result<f64> {
    let price: f64 = raw.trim().parse().map_err(|_| CoreError::InvalidPrice)?;
    validate_price(price)
}

/// Inclusive price filter; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    #[must_use]
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}
