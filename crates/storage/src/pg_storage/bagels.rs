//! BagelStore implementation for PgStorage.

use super::*;

use async_trait::async_trait;
use sandwich_map_core::NewBagelVendor;

use crate::traits::BagelStore;

#[async_trait]
impl BagelStore for PgStorage {
    async fn insert_vendor(&self, new: NewBagelVendor) -> Result<BagelVendor, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        let row = sqlx::query(&format!(
            "INSERT INTO bagel_vendors ({VENDOR_COLUMNS})
             VALUES ($1,$2,$3,$4)
             RETURNING {VENDOR_COLUMNS}"
        ))
        .bind(&id)
        .bind(&new.name)
        .bind(new.base_price)
        .bind(sqlx::types::Json(&new.toppings))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::from_vendor_insert(e, &new.name))?;
        row_to_vendor(&row)
    }

    async fn list_vendors(&self) -> Result<Vec<BagelVendor>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {VENDOR_COLUMNS} FROM bagel_vendors ORDER BY name_normalized ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_vendor).collect()
    }

    async fn count_vendors(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bagel_vendors")
            .fetch_one(&self.pool)
            .await?;
        count_to_u64(count)
    }
}
