use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sandwich_map_geocoding::{GeocodeError, GeocodeResult, Geocoder};
use sandwich_map_storage::StorageBackend;

use crate::{BagelService, PriceService};

/// Geocoder answering from a fixed table; unknown addresses are misses.
#[derive(Default)]
pub(crate) struct StubGeocoder {
    hits: HashMap<String, GeocodeResult>,
    fail_with_status: Option<u16>,
}

impl StubGeocoder {
    pub(crate) fn with_hit(mut self, address: &str, lat: f64, lon: f64) -> Self {
        self.hits.insert(
            address.to_owned(),
            GeocodeResult { lat, lon, display_name: format!("{address}, Manhattan") },
        );
        self
    }

    /// Every lookup fails as if the upstream answered with `code`.
    pub(crate) fn failing(code: u16) -> Self {
        Self { hits: HashMap::new(), fail_with_status: Some(code) }
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        if let Some(code) = self.fail_with_status {
            return Err(GeocodeError::Rejected { status: code, body: "stub failure".to_owned() });
        }
        Ok(self.hits.get(address).cloned())
    }
}

pub(crate) fn price_service(geocoder: StubGeocoder) -> (PriceService, Arc<StorageBackend>) {
    let storage = Arc::new(StorageBackend::new_memory());
    (PriceService::new(Arc::clone(&storage), Arc::new(geocoder)), storage)
}

pub(crate) fn bagel_service() -> BagelService {
    BagelService::new(Arc::new(StorageBackend::new_memory()))
}
