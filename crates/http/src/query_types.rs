//! Request/query types (Deserialize)

use std::collections::BTreeMap;

use sandwich_map_core::{Coordinate, DistanceMetric, NearbyQuery, PriceRange};
use serde::Deserialize;

use crate::api_error::ApiError;

/// `min_price` / `max_price` as raw text, so each caller decides how strict to be.
#[derive(Debug, Default, Deserialize)]
pub struct PriceFilterQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
}

impl PriceFilterQuery {
    /// Map view: bounds that do not parse are dropped.
    pub fn lenient_range(&self) -> PriceRange {
        PriceRange::new(
            parse_bound(self.min_price.as_deref()).ok().flatten(),
            parse_bound(self.max_price.as_deref()).ok().flatten(),
        )
    }

    /// JSON API: a bound that does not parse is a 400.
    pub fn strict_range(&self) -> Result<PriceRange, ApiError> {
        let min = parse_bound(self.min_price.as_deref())
            .map_err(|()| ApiError::BadRequest("Invalid min price".to_owned()))?;
        let max = parse_bound(self.max_price.as_deref())
            .map_err(|()| ApiError::BadRequest("Invalid max price".to_owned()))?;
        Ok(PriceRange::new(min, max))
    }
}

/// Empty means "no bound"; anything else must be a finite number.
fn parse_bound(raw: Option<&str>) -> Result<Option<f64>, ()> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(()),
        },
    }
}

/// Query string of `GET /`: price filters plus a pending notice.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(flatten)]
    pub filter: PriceFilterQuery,
    pub notice: Option<String>,
    pub notice_kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub address: String,
}

/// `POST /add` form body. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct NearbyParams {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub radius: Option<String>,
    pub metric: Option<String>,
}

impl NearbyParams {
    pub fn to_query(&self) -> Result<NearbyQuery, ApiError> {
        let (Some(lat), Some(lon)) = (self.lat.as_deref(), self.lon.as_deref()) else {
            return Err(ApiError::BadRequest("Missing required parameters: lat and lon".to_owned()));
        };
        let invalid = || ApiError::BadRequest("Invalid coordinates".to_owned());
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
        let center = Coordinate::new(lat, lon).map_err(|_| invalid())?;

        let mut query = NearbyQuery::new(center);
        if let Some(radius) = self.radius.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            let radius: f64 = radius.parse().map_err(|_| invalid())?;
            query = query.with_radius(radius).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        }
        if let Some(metric) = self.metric.as_deref() {
            let metric: DistanceMetric =
                metric.parse().map_err(|e: sandwich_map_core::CoreError| {
                    ApiError::BadRequest(e.to_string())
                })?;
            query = query.with_metric(metric);
        }
        Ok(query)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteQuery {
    /// Comma-separated topping names.
    #[serde(default)]
    pub toppings: String,
}

impl QuoteQuery {
    pub fn selected(&self) -> Vec<&str> {
        self.toppings.split(',').map(str::trim).filter(|t| !t.is_empty()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct NewVendorRequest {
    pub name: String,
    pub base_price: f64,
    #[serde(default)]
    pub toppings: BTreeMap<String, f64>,
}
