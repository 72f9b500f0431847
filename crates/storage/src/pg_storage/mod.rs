//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod bagels;
mod prices;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sandwich_map_core::{
    BagelVendor, PriceRecord, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;

pub(crate) const PRICE_COLUMNS: &str = "id, name, address, lat, lon, price, last_updated";

pub(crate) const VENDOR_COLUMNS: &str = "id, name, base_price, toppings";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects, applies migrations and returns a pooled handle.
    ///
    /// # Errors
    /// Fails if the database is unreachable or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(StorageError::Migration)?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_price(row: &sqlx::postgres::PgRow) -> Result<PriceRecord, StorageError> {
    let last_updated: DateTime<Utc> = row.try_get("last_updated")?;
    Ok(PriceRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        address: row.try_get("address")?,
        lat: row.try_get("lat")?,
        lon: row.try_get("lon")?,
        price: row.try_get("price")?,
        last_updated,
    })
}

pub(crate) fn row_to_vendor(row: &sqlx::postgres::PgRow) -> Result<BagelVendor, StorageError> {
    let toppings_json: serde_json::Value = row.try_get("toppings")?;
    let toppings: BTreeMap<String, f64> =
        serde_json::from_value(toppings_json).map_err(|e| StorageError::CorruptRow {
            column: "bagel_vendors.toppings",
            detail: e.to_string(),
        })?;
    Ok(BagelVendor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        base_price: row.try_get("base_price")?,
        toppings,
    })
}

/// Converts a `COUNT(*)` result, which PostgreSQL returns as `BIGINT`.
pub(crate) fn count_to_u64(count: i64) -> Result<u64, StorageError> {
    u64::try_from(count).map_err(|_| StorageError::CorruptRow {
        column: "count",
        detail: format!("negative row count {count}"),
    })
}
