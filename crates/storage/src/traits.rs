//! Storage backend trait abstraction
//!
//! Async domain traits implemented by every backend, so services take an
//! injected handle instead of reaching for a process-wide connection.

use async_trait::async_trait;
use sandwich_map_core::{
    BagelVendor, BoundingBox, NewBagelVendor, NewPriceRecord, PriceRange, PriceRecord,
};

use crate::error::StorageError;

/// Append-only price record storage.
#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Insert a record, stamping `id` and `last_updated`. Never overwrites.
    async fn insert_price(&self, new: NewPriceRecord) -> Result<PriceRecord, StorageError>;

    /// Get record by ID. `NotFound` when no record has this id.
    async fn get_price(&self, id: &str) -> Result<PriceRecord, StorageError>;

    /// All records whose price lies in `range`, oldest first.
    async fn list_prices(&self, range: PriceRange) -> Result<Vec<PriceRecord>, StorageError>;

    /// Records strictly inside the bounding box, oldest first.
    async fn prices_in_box(&self, bbox: &BoundingBox) -> Result<Vec<PriceRecord>, StorageError>;

    /// Total stored records, superseded ones included.
    async fn count_prices(&self) -> Result<u64, StorageError>;
}

/// Bagel vendor menus.
#[async_trait]
pub trait BagelStore: Send + Sync {
    /// Insert a vendor menu.
    async fn insert_vendor(&self, new: NewBagelVendor) -> Result<BagelVendor, StorageError>;

    /// All vendors ordered by name.
    async fn list_vendors(&self) -> Result<Vec<BagelVendor>, StorageError>;

    /// Number of stored vendors.
    async fn count_vendors(&self) -> Result<u64, StorageError>;
}
