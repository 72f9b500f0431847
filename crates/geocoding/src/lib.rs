//! Address geocoding for sandwich-map
//!
//! Resolves free-text NYC addresses to coordinates through a Nominatim
//! compatible search endpoint.

mod client;
mod error;

pub use client::{with_city_suffix, GeocoderConfig, NominatimClient};
pub use error::GeocodeError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A resolved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

/// Anything that can turn an address into coordinates.
///
/// `Ok(None)` means the service answered but found nothing.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError>;
}
