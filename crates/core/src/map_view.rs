//! View-model helpers for the map page.

use serde::Serialize;

use crate::{
    marker_color, Coordinate, PriceRecord, DEFAULT_MAP_CENTER_LAT, DEFAULT_MAP_CENTER_LON,
};

/// A record as drawn on the map, with its marker colour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    #[serde(flatten)]
    pub record: PriceRecord,
    pub color: &'static str,
}

impl From<PriceRecord> for MapMarker {
    fn from(record: PriceRecord) -> Self {
        let color = marker_color(record.price);
        Self { record, color }
    }
}

/// Mean position of the records, or Midtown when there are none.
#[must_use]
pub fn map_center(records: &[PriceRecord]) -> Coordinate {
    if records.is_empty() {
        return Coordinate { lat: DEFAULT_MAP_CENTER_LAT, lon: DEFAULT_MAP_CENTER_LON };
    }
    #[allow(clippy::cast_precision_loss, reason = "record counts are far below 2^52")]
    let n = records.len() as f64;
    let lat = records.iter().map(|r| r.lat).sum::<f64>() / n;
    let lon = records.iter().map(|r| r.lon).sum::<f64>() / n;
    Coordinate { lat, lon }
}
