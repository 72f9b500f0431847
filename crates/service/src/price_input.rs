//! Validation of price submissions from the HTML form and the JSON API.

use sandwich_map_core::{parse_price, validate_price, Coordinate, CoreError};
use serde_json::{Map, Value};

use crate::ServiceError;

/// Shown when a submitted address cannot be placed on the map.
pub const ADDRESS_NOT_FOUND_MESSAGE: &str =
    "Could not find this address on the map. Please try a more specific NYC address.";

const REQUIRED_API_FIELDS: [&str; 3] = ["name", "address", "price"];

/// Raw fields from the "add a sandwich" form.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    pub name: String,
    pub address: String,
    pub price: String,
}

impl FormSubmission {
    /// Returns trimmed name, trimmed address and the parsed price.
    pub(crate) fn validate(&self) -> Result<(String, String, f64), ServiceError> {
        let name = self.name.trim();
        let address = self.address.trim();
        let price = self.price.trim();
        if name.is_empty() || address.is_empty() || price.is_empty() {
            return Err(ServiceError::InvalidInput("All fields are required".to_owned()));
        }
        Ok((name.to_owned(), address.to_owned(), parse_price(price)?))
    }
}

/// A JSON API submission after field checks.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ApiSubmission {
    pub name: String,
    pub address: String,
    pub price: f64,
    /// Present only when the caller supplied both `lat` and `lon`.
    pub location: Option<Coordinate>,
}

pub(crate) fn parse_api_payload(payload: &Value) -> Result<ApiSubmission, ServiceError> {
    let fields = match payload.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ServiceError::InvalidInput("No data provided".to_owned())),
    };

    let missing: Vec<&str> = REQUIRED_API_FIELDS
        .into_iter()
        .filter(|field| fields.get(*field).is_none_or(Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(ServiceError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let price = match fields.get("price") {
        Some(Value::Number(n)) => n.as_f64().ok_or(CoreError::InvalidPrice)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| CoreError::InvalidPrice)?,
        _ => return Err(CoreError::InvalidPrice.into()),
    };
    let price = validate_price(price)?;

    let name = string_field(fields, "name")?;
    let address = string_field(fields, "address")?;

    let location = match (present(fields, "lat"), present(fields, "lon")) {
        (Some(lat), Some(lon)) => {
            let lat = coordinate_component(lat, "lat")?;
            let lon = coordinate_component(lon, "lon")?;
            Some(Coordinate::new(lat, lon).map_err(|e| match e {
                CoreError::InvalidCoordinate(detail) => invalid_coordinate(&detail),
                other => invalid_coordinate(&other.to_string()),
            })?)
        },
        _ => None,
    };

    Ok(ApiSubmission { name, address, price, location })
}

fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, ServiceError> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ServiceError::InvalidInput(format!("Field '{key}' must be a string"))),
    }
}

fn coordinate_component(value: &Value, key: &str) -> Result<f64, ServiceError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid_coordinate(key)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid_coordinate(&format!("could not convert {key} '{s}' to float"))),
        _ => Err(invalid_coordinate(&format!("{key} must be a number"))),
    }
}

fn invalid_coordinate(detail: &str) -> ServiceError {
    ServiceError::InvalidInput(format!("Invalid coordinate format: {detail}"))
}
