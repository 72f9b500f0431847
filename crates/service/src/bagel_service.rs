use std::sync::Arc;

use sandwich_map_core::{quote_all, BagelQuote, BagelVendor, NewBagelVendor, MAX_BAGEL_TOPPINGS};
use sandwich_map_storage::traits::BagelStore;
use sandwich_map_storage::{sample_bagel_vendors, StorageBackend};

use crate::ServiceError;

pub struct BagelService {
    storage: Arc<StorageBackend>,
}

impl BagelService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_vendors(&self) -> Result<Vec<BagelVendor>, ServiceError> {
        Ok(self.storage.list_vendors().await?)
    }

    pub async fn add_vendor(&self, new: NewBagelVendor) -> Result<BagelVendor, ServiceError> {
        let vendor = self.storage.insert_vendor(new).await?;
        tracing::info!(id = %vendor.id, name = %vendor.name, "added bagel vendor");
        Ok(vendor)
    }

    /// Quotes every vendor carrying all selected toppings, cheapest first.
    pub async fn quote<S: AsRef<str> + Sync>(
        &self,
        selected: &[S],
    ) -> Result<Vec<BagelQuote>, ServiceError> {
        if selected.len() > MAX_BAGEL_TOPPINGS {
            return Err(ServiceError::InvalidInput(format!(
                "At most {MAX_BAGEL_TOPPINGS} toppings can be selected"
            )));
        }
        let vendors = self.storage.list_vendors().await?;
        Ok(quote_all(&vendors, selected))
    }

    /// Inserts the sample vendors when no vendor exists yet.
    pub async fn seed_if_empty(&self) -> Result<usize, ServiceError> {
        if self.storage.count_vendors().await? > 0 {
            return Ok(0);
        }
        let samples = sample_bagel_vendors();
        let count = samples.len();
        for new in samples {
            self.storage.insert_vendor(new).await?;
        }
        tracing::info!(count, "seeded sample bagel vendors");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use sandwich_map_core::NewBagelVendor;

    use crate::test_support::bagel_service;

    #[tokio::test]
    async fn test_quote_sorted_and_filtered() {
        let service = bagel_service();
        assert_eq!(service.seed_if_empty().await.unwrap(), 2);

        let quotes = service.quote(&["Cream Cheese", "lox"]).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].vendor, "Madison Bagel Co");
        assert!((quotes[0].total - 7.75).abs() < 1e-9);
        assert!((quotes[1].total - 8.25).abs() < 1e-9);

        let capers = service.quote(&["capers"]).await.unwrap();
        assert_eq!(capers.len(), 1);
        assert_eq!(capers[0].vendor, "Broadway Bagels");
    }

    #[tokio::test]
    async fn test_plain_bagel_quotes_base_price() {
        let service = bagel_service();
        service.seed_if_empty().await.unwrap();
        let quotes = service.quote::<&str>(&[]).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert!((quotes[0].total - 1.50).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let service = bagel_service();
        service.seed_if_empty().await.unwrap();
        assert_eq!(service.seed_if_empty().await.unwrap(), 0);
        assert_eq!(service.list_vendors().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_vendor_is_client_error() {
        let service = bagel_service();
        let new = NewBagelVendor::new("Corner Bagels", 2.0, [("butter", 0.25)]).unwrap();
        service.add_vendor(new.clone()).await.unwrap();
        let err = service.add_vendor(new).await.unwrap_err();
        assert!(err.is_duplicate());
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_too_many_toppings_rejected() {
        let service = bagel_service();
        let selected: Vec<String> = (0..40).map(|i| format!("topping {i}")).collect();
        let err = service.quote(selected.as_slice()).await.unwrap_err();
        assert!(err.is_client_error());
    }
}
