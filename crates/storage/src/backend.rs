//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use sandwich_map_core::{
    BagelVendor, BoundingBox, NewBagelVendor, NewPriceRecord, PriceRange, PriceRecord,
};

use crate::error::StorageError;
use crate::traits::{BagelStore, PriceStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <crate::PgStorage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <crate::MemoryStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(crate::PgStorage),
    Memory(crate::MemoryStorage),
}

impl StorageBackend {
    /// # Errors
    /// Fails if PostgreSQL is unreachable or migrations fail.
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

// ── PriceStore ───────────────────────────────────────────────────

#[async_trait]
impl PriceStore for StorageBackend {
    async fn insert_price(&self, new: NewPriceRecord) -> Result<PriceRecord, StorageError> {
        dispatch!(self, PriceStore, insert_price(new))
    }

    async fn get_price(&self, id: &str) -> Result<PriceRecord, StorageError> {
        dispatch!(self, PriceStore, get_price(id))
    }

    async fn list_prices(&self, range: PriceRange) -> Result<Vec<PriceRecord>, StorageError> {
        dispatch!(self, PriceStore, list_prices(range))
    }

    async fn prices_in_box(&self, bbox: &BoundingBox) -> Result<Vec<PriceRecord>, StorageError> {
        dispatch!(self, PriceStore, prices_in_box(bbox))
    }

    async fn count_prices(&self) -> Result<u64, StorageError> {
        dispatch!(self, PriceStore, count_prices())
    }
}

// ── BagelStore ───────────────────────────────────────────────────

#[async_trait]
impl BagelStore for StorageBackend {
    async fn insert_vendor(&self, new: NewBagelVendor) -> Result<BagelVendor, StorageError> {
        dispatch!(self, BagelStore, insert_vendor(new))
    }

    async fn list_vendors(&self) -> Result<Vec<BagelVendor>, StorageError> {
        dispatch!(self, BagelStore, list_vendors())
    }

    async fn count_vendors(&self) -> Result<u64, StorageError> {
        dispatch!(self, BagelStore, count_vendors())
    }
}
