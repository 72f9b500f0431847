//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, TimeZone, Utc};
use sandwich_map_core::{Coordinate, NewPriceRecord, PriceRecord};

mod price_tests;

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).single().unwrap_or_default()
}

pub fn create_test_record(id: &str, lat: f64, lon: f64, price: f64, t: i64) -> PriceRecord {
    PriceRecord {
        id: id.to_owned(),
        name: format!("Deli {id}"),
        address: format!("{id} Test St, New York, NY"),
        lat,
        lon,
        price,
        last_updated: at(t),
    }
}

pub fn create_new_record(name: &str, lat: f64, lon: f64, price: f64) -> NewPriceRecord {
    NewPriceRecord::new(name, format!("{name}, New York, NY"), Coordinate { lat, lon }, price)
        .unwrap()
}
