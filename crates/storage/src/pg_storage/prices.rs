//! PriceStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use sandwich_map_core::{BoundingBox, NewPriceRecord, PriceRange};

use crate::traits::PriceStore;

#[async_trait]
impl PriceStore for PgStorage {
    async fn insert_price(&self, new: NewPriceRecord) -> Result<PriceRecord, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO sandwich_prices ({PRICE_COLUMNS})
             VALUES ($1,$2,$3,$4,$5,$6,$7)
             RETURNING {PRICE_COLUMNS}"
        ))
        .bind(&id)
        .bind(&new.name)
        .bind(&new.address)
        .bind(new.location.lat)
        .bind(new.location.lon)
        .bind(new.price)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        row_to_price(&row)
    }

    async fn get_price(&self, id: &str) -> Result<PriceRecord, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {PRICE_COLUMNS} FROM sandwich_prices WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| StorageError::price_not_found(id))?;
        row_to_price(&row)
    }

    async fn list_prices(&self, range: PriceRange) -> Result<Vec<PriceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRICE_COLUMNS} FROM sandwich_prices
             WHERE ($1::DOUBLE PRECISION IS NULL OR price >= $1)
               AND ($2::DOUBLE PRECISION IS NULL OR price <= $2)
             ORDER BY last_updated ASC, id ASC"
        ))
        .bind(range.min)
        .bind(range.max)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_price).collect()
    }

    async fn prices_in_box(&self, bbox: &BoundingBox) -> Result<Vec<PriceRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRICE_COLUMNS} FROM sandwich_prices
             WHERE lat > $1 AND lat < $2 AND lon > $3 AND lon < $4
             ORDER BY last_updated ASC, id ASC"
        ))
        .bind(bbox.min_lat)
        .bind(bbox.max_lat)
        .bind(bbox.min_lon)
        .bind(bbox.max_lon)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_price).collect()
    }

    async fn count_prices(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sandwich_prices")
            .fetch_one(&self.pool)
            .await?;
        count_to_u64(count)
    }
}
