use sandwich_map_core::{Coordinate, DistanceMetric, NearbyQuery, NewPriceRecord, PriceRange};
use sandwich_map_storage::traits::PriceStore;
use sandwich_map_storage::StorageError;
use serde_json::json;

use crate::test_support::{price_service, StubGeocoder};
use crate::{FormSubmission, ServiceError, ADDRESS_NOT_FOUND_MESSAGE};

fn form(name: &str, address: &str, price: &str) -> FormSubmission {
    FormSubmission { name: name.to_owned(), address: address.to_owned(), price: price.to_owned() }
}

fn new_record(name: &str, lat: f64, lon: f64, price: f64) -> NewPriceRecord {
    NewPriceRecord::new(name, format!("{name}, New York, NY"), Coordinate { lat, lon }, price)
        .unwrap()
}

#[tokio::test]
async fn test_map_records_keeps_freshest_per_location() {
    let (service, storage) = price_service(StubGeocoder::default());
    storage.insert_price(new_record("Old", 40.7128, -74.0060, 6.0)).await.unwrap();
    storage.insert_price(new_record("New", 40.7128, -74.0060, 7.0)).await.unwrap();
    storage.insert_price(new_record("Other", 40.7300, -73.9900, 5.0)).await.unwrap();

    let all = service.list(PriceRange::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let map = service.map_records(PriceRange::default()).await.unwrap();
    assert_eq!(map.len(), 2);
    let shared = map.iter().find(|r| r.lat == 40.7128).unwrap();
    assert_eq!(shared.name, "New");
    assert!((shared.price - 7.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_map_records_filters_before_dedup() {
    let (service, storage) = price_service(StubGeocoder::default());
    storage.insert_price(new_record("Cheap", 40.7128, -74.0060, 5.5)).await.unwrap();
    storage.insert_price(new_record("Pricey", 40.7128, -74.0060, 8.5)).await.unwrap();

    let map = service.map_records(PriceRange::new(Some(5.0), Some(7.0))).await.unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map[0].name, "Cheap");
}

#[tokio::test]
async fn test_nearby_sorted_by_distance() {
    let (service, storage) = price_service(StubGeocoder::default());
    storage.insert_price(new_record("Far", 40.7200, -74.0000, 6.0)).await.unwrap();
    storage.insert_price(new_record("Here", 40.7128, -74.0060, 6.0)).await.unwrap();
    storage.insert_price(new_record("Outside", 40.8000, -74.0060, 6.0)).await.unwrap();

    let query = NearbyQuery::new(Coordinate { lat: 40.7128, lon: -74.0060 });
    let matches = service.nearby(&query).await.unwrap();
    let names: Vec<&str> = matches.iter().map(|m| m.record.name.as_str()).collect();
    assert_eq!(names, vec!["Here", "Far"]);
    assert!(matches[0].distance_km.abs() < f64::EPSILON);

    let haversine = service.nearby(&query.with_metric(DistanceMetric::Haversine)).await.unwrap();
    assert_eq!(haversine.len(), 2);
}

#[tokio::test]
async fn test_search_hit_returns_nearby() {
    let geocoder = StubGeocoder::default().with_hit("123 Broadway", 40.728, -73.991);
    let (service, _storage) = price_service(geocoder);
    service.seed_if_empty().await.unwrap();

    let outcome = service.search("  123 Broadway ").await.unwrap();
    assert_eq!(outcome.address, "123 Broadway");
    assert!(!outcome.is_miss());
    assert_eq!(outcome.nearby.first().map(|m| m.record.name.as_str()), Some("Joe's Deli"));
}

#[tokio::test]
async fn test_search_miss_and_blank() {
    let (service, _storage) = price_service(StubGeocoder::default());
    let miss = service.search("nowhere").await.unwrap();
    assert!(miss.is_miss());
    assert!(miss.nearby.is_empty());

    let blank = service.search("   ").await.unwrap();
    assert!(!blank.is_miss());
    assert!(blank.location.is_none());
}

#[tokio::test]
async fn test_locate_treats_upstream_failure_as_miss() {
    let (service, _storage) = price_service(StubGeocoder::failing(503));
    assert!(service.locate("123 Broadway").await.is_none());
}

#[tokio::test]
async fn test_add_from_form_geocodes_and_stores() {
    let geocoder = StubGeocoder::default().with_hit("123 Broadway", 40.728, -73.991);
    let (service, _storage) = price_service(geocoder);

    let record = service.add_from_form(&form("Joe's Deli", "123 Broadway", "5.99")).await.unwrap();
    assert!((record.lat - 40.728).abs() < f64::EPSILON);
    assert_eq!(service.get(&record.id).await.unwrap(), record);
}

#[tokio::test]
async fn test_get_unknown_id() {
    let (service, _storage) = price_service(StubGeocoder::default());
    let err = service.get("missing").await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(StorageError::NotFound { .. })));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_add_from_form_unknown_address() {
    let (service, _storage) = price_service(StubGeocoder::default());
    let err = service.add_from_form(&form("Joe's", "nowhere", "5")).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), ADDRESS_NOT_FOUND_MESSAGE);
}

#[tokio::test]
async fn test_add_from_form_geocoder_outage_is_a_miss() {
    let (service, storage) = price_service(StubGeocoder::failing(503));
    let err = service.add_from_form(&form("Joe's", "123 Broadway", "5")).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), ADDRESS_NOT_FOUND_MESSAGE);
    assert_eq!(storage.count_prices().await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_from_api_geocoder_outage_is_a_miss() {
    let (service, storage) = price_service(StubGeocoder::failing(503));
    let err = service
        .add_from_api(&json!({"name": "A", "address": "123 Broadway", "price": 5}))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
    assert_eq!(err.to_string(), "Could not geocode the address");
    assert_eq!(storage.count_prices().await.unwrap(), 0);
}

#[tokio::test]
async fn test_add_from_api_uses_supplied_coordinates() {
    let (service, _storage) = price_service(StubGeocoder::failing(500));
    let record = service
        .add_from_api(&json!({
            "name": "New Deli",
            "address": "456 New St, Brooklyn",
            "lat": 40.72,
            "lon": -74.01,
            "price": 6.99
        }))
        .await
        .unwrap();
    assert!((record.lon + 74.01).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_add_from_api_geocode_miss() {
    let (service, _storage) = price_service(StubGeocoder::default());
    let err = service
        .add_from_api(&json!({"name": "A", "address": "nowhere", "price": 5}))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Could not geocode the address");
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_seed_only_when_empty() {
    let (service, _storage) = price_service(StubGeocoder::default());
    assert_eq!(service.seed_if_empty().await.unwrap(), 3);
    assert_eq!(service.seed_if_empty().await.unwrap(), 0);
    assert_eq!(service.list(PriceRange::default()).await.unwrap().len(), 3);
}
