use std::sync::Arc;

use sandwich_map_core::{
    freshest_per_location, find_nearby, Coordinate, NearbyMatch, NearbyQuery, NewPriceRecord,
    PriceRange, PriceRecord,
};
use sandwich_map_geocoding::{GeocodeResult, Geocoder};
use sandwich_map_storage::traits::PriceStore;
use sandwich_map_storage::{sample_price_records, StorageBackend};
use serde_json::Value;

use crate::price_input::{parse_api_payload, FormSubmission, ADDRESS_NOT_FOUND_MESSAGE};
use crate::ServiceError;

const API_GEOCODE_MISS_MESSAGE: &str = "Could not geocode the address";

/// Result of an address search.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// The trimmed address that was searched.
    pub address: String,
    /// Geocoder hit, `None` when the address was blank or not found.
    pub location: Option<GeocodeResult>,
    pub nearby: Vec<NearbyMatch>,
}

impl SearchOutcome {
    /// An address was entered but could not be placed.
    #[must_use]
    pub fn is_miss(&self) -> bool {
        !self.address.is_empty() && self.location.is_none()
    }
}

pub struct PriceService {
    storage: Arc<StorageBackend>,
    geocoder: Arc<dyn Geocoder>,
}

impl PriceService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { storage, geocoder }
    }

    /// Every stored record in the price range, superseded ones included.
    pub async fn list(&self, range: PriceRange) -> Result<Vec<PriceRecord>, ServiceError> {
        Ok(self.storage.list_prices(range).await?)
    }

    /// Records in the price range, one per location, freshest wins.
    pub async fn map_records(&self, range: PriceRange) -> Result<Vec<PriceRecord>, ServiceError> {
        let records = self.storage.list_prices(range).await?;
        Ok(freshest_per_location(records))
    }

    pub async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<NearbyMatch>, ServiceError> {
        let candidates = self.storage.prices_in_box(&query.bounding_box()).await?;
        let matches = find_nearby(candidates, query);
        tracing::debug!(
            lat = query.center.lat,
            lon = query.center.lon,
            radius = query.radius,
            count = matches.len(),
            "nearby search"
        );
        Ok(matches)
    }

    /// Geocodes an address. Upstream failures are logged and reported as a miss.
    pub async fn locate(&self, address: &str) -> Option<GeocodeResult> {
        match self.geocoder.geocode(address).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "geocoding failed");
                None
            },
        }
    }

    /// Geocodes the address and collects records within the default radius.
    pub async fn search(&self, address: &str) -> Result<SearchOutcome, ServiceError> {
        let address = address.trim();
        if address.is_empty() {
            return Ok(SearchOutcome::default());
        }
        tracing::info!(address = %address, "search request");

        let Some(location) = self.locate(address).await else {
            return Ok(SearchOutcome {
                address: address.to_owned(),
                location: None,
                nearby: Vec::new(),
            });
        };
        let center = Coordinate::new(location.lat, location.lon)?;
        let nearby = self.nearby(&NearbyQuery::new(center)).await?;
        tracing::info!(count = nearby.len(), "found records near location");
        Ok(SearchOutcome { address: address.to_owned(), location: Some(location), nearby })
    }

    /// Validates a form submission, geocodes it and stores the record.
    ///
    /// An address the geocoder cannot place, or cannot reach, is `NotFound`.
    pub async fn add_from_form(&self, form: &FormSubmission) -> Result<PriceRecord, ServiceError> {
        let (name, address, price) = form.validate()?;
        let location = self
            .locate(&address)
            .await
            .ok_or_else(|| ServiceError::NotFound(ADDRESS_NOT_FOUND_MESSAGE.to_owned()))?;
        let coordinate = Coordinate::new(location.lat, location.lon)?;
        self.insert(NewPriceRecord::new(name, address, coordinate, price)?).await
    }

    /// Stores a JSON API submission, geocoding only when `lat`/`lon` are absent.
    pub async fn add_from_api(&self, payload: &Value) -> Result<PriceRecord, ServiceError> {
        let submission = parse_api_payload(payload)?;
        let coordinate = match submission.location {
            Some(coordinate) => coordinate,
            None => {
                let hit = self
                    .locate(&submission.address)
                    .await
                    .ok_or_else(|| ServiceError::InvalidInput(API_GEOCODE_MISS_MESSAGE.to_owned()))?;
                Coordinate::new(hit.lat, hit.lon)?
            },
        };
        let new =
            NewPriceRecord::new(submission.name, submission.address, coordinate, submission.price)?;
        self.insert(new).await
    }

    /// `Storage(NotFound)` when no record has this id.
    pub async fn get(&self, id: &str) -> Result<PriceRecord, ServiceError> {
        Ok(self.storage.get_price(id).await?)
    }

    /// Inserts the sample delis when the store holds no records.
    /// Returns the number of rows inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, ServiceError> {
        if self.storage.count_prices().await? > 0 {
            return Ok(0);
        }
        let samples = sample_price_records();
        let count = samples.len();
        for new in samples {
            self.storage.insert_price(new).await?;
        }
        tracing::info!(count, "seeded sample price records");
        Ok(count)
    }

    async fn insert(&self, new: NewPriceRecord) -> Result<PriceRecord, ServiceError> {
        let record = self.storage.insert_price(new).await?;
        tracing::info!(
            id = %record.id,
            name = %record.name,
            price = record.price,
            "added price record"
        );
        Ok(record)
    }
}
