//! Per-location deduplication of price records.

use std::collections::HashMap;

use crate::PriceRecord;

/// Exact-value key for a coordinate pair.
///
/// `-0.0` is folded into `0.0` so both spellings of the same point collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey(u64, u64);

impl LocationKey {
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self(normalize_zero(lat).to_bits(), normalize_zero(lon).to_bits())
    }

    #[must_use]
    pub fn of(record: &PriceRecord) -> Self {
        Self::new(record.lat, record.lon)
    }
}

fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Collapses records sharing a coordinate pair to the most recently updated one.
///
/// A stored record is replaced only when the incoming `last_updated` is strictly
/// greater, so on a tie the first record seen wins. Output keeps first-seen key
/// order.
#[must_use]
pub fn freshest_per_location<I>(records: I) -> Vec<PriceRecord>
where
    I: IntoIterator<Item = PriceRecord>,
{
    let mut slots: HashMap<LocationKey, usize> = HashMap::new();
    let mut kept: Vec<PriceRecord> = Vec::new();

    for record in records {
        let key = LocationKey::of(&record);
        match slots.get(&key).and_then(|&idx| kept.get_mut(idx)) {
            Some(existing) => {
                if record.last_updated > existing.last_updated {
                    *existing = record;
                }
            },
            None => {
                slots.insert(key, kept.len());
                kept.push(record);
            },
        }
    }

    kept
}
