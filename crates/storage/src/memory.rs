//! In-memory storage backend.
//!
//! Used when no `DATABASE_URL` is configured and throughout the test suites.
//! Rows live behind `tokio::sync::RwLock`s; clones share the same rows.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use sandwich_map_core::{
    BagelVendor, BoundingBox, NewBagelVendor, NewPriceRecord, PriceRange, PriceRecord,
};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{BagelStore, PriceStore};

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    prices: Arc<RwLock<Vec<PriceRecord>>>,
    vendors: Arc<RwLock<Vec<BagelVendor>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts fully-formed records as-is. Test fixtures use this to control
    /// `last_updated`.
    pub async fn insert_raw(&self, records: impl IntoIterator<Item = PriceRecord>) {
        self.prices.write().await.extend(records);
    }
}

/// `Utc::now()`, nudged forward so stamps within one store strictly increase.
fn next_stamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if now <= prev => prev + TimeDelta::microseconds(1),
        _ => now,
    }
}

#[async_trait]
impl PriceStore for MemoryStorage {
    async fn insert_price(&self, new: NewPriceRecord) -> Result<PriceRecord, StorageError> {
        let mut prices = self.prices.write().await;
        let latest = prices.iter().map(|r| r.last_updated).max();
        let record =
            PriceRecord::from_new(uuid::Uuid::new_v4().to_string(), new, next_stamp(latest));
        prices.push(record.clone());
        Ok(record)
    }

    async fn get_price(&self, id: &str) -> Result<PriceRecord, StorageError> {
        self.prices
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StorageError::price_not_found(id))
    }

    async fn list_prices(&self, range: PriceRange) -> Result<Vec<PriceRecord>, StorageError> {
        Ok(self.prices.read().await.iter().filter(|r| range.contains(r.price)).cloned().collect())
    }

    async fn prices_in_box(&self, bbox: &BoundingBox) -> Result<Vec<PriceRecord>, StorageError> {
        Ok(self
            .prices
            .read()
            .await
            .iter()
            .filter(|r| bbox.contains(r.lat, r.lon))
            .cloned()
            .collect())
    }

    async fn count_prices(&self) -> Result<u64, StorageError> {
        Ok(self.prices.read().await.len() as u64)
    }
}

#[async_trait]
impl BagelStore for MemoryStorage {
    async fn insert_vendor(&self, new: NewBagelVendor) -> Result<BagelVendor, StorageError> {
        let mut vendors = self.vendors.write().await;
        let normalized = new.name.trim().to_lowercase();
        if vendors.iter().any(|v| v.name.trim().to_lowercase() == normalized) {
            return Err(StorageError::DuplicateVendor(new.name));
        }
        let vendor = BagelVendor::from_new(uuid::Uuid::new_v4().to_string(), new);
        vendors.push(vendor.clone());
        Ok(vendor)
    }

    async fn list_vendors(&self) -> Result<Vec<BagelVendor>, StorageError> {
        let mut vendors = self.vendors.read().await.clone();
        vendors.sort_by_key(|v| v.name.trim().to_lowercase());
        Ok(vendors)
    }

    async fn count_vendors(&self) -> Result<u64, StorageError> {
        Ok(self.vendors.read().await.len() as u64)
    }
}
