use sandwich_map_core::{BoundingBox, Coordinate, PriceRange};

use super::{create_new_record, create_test_record};
use crate::traits::PriceStore;
use crate::{sample_price_records, MemoryStorage, StorageBackend, StorageError};

#[tokio::test]
async fn insert_assigns_id_and_timestamp() {
    let storage = MemoryStorage::new();
    let rec = storage.insert_price(create_new_record("Joe's", 40.7, -73.9, 5.99)).await.unwrap();
    assert!(!rec.id.is_empty());
    assert_eq!(rec.name, "Joe's");
    let fetched = storage.get_price(&rec.id).await.unwrap();
    assert_eq!(fetched, rec);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let storage = MemoryStorage::new();
    storage.insert_price(create_new_record("Joe's", 40.7, -73.9, 5.99)).await.unwrap();
    let err = storage.get_price("missing").await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "price", ref id } if id == "missing"));
}

#[tokio::test]
async fn same_location_inserts_are_both_kept_with_increasing_stamps() {
    let storage = MemoryStorage::new();
    let first = storage.insert_price(create_new_record("A", 40.7128, -74.006, 6.0)).await.unwrap();
    let second = storage.insert_price(create_new_record("B", 40.7128, -74.006, 7.0)).await.unwrap();
    assert!(second.last_updated > first.last_updated);
    assert_eq!(storage.count_prices().await.unwrap(), 2);
}

#[tokio::test]
async fn list_filters_by_inclusive_price_range() {
    let storage = MemoryStorage::new();
    storage
        .insert_raw(vec![
            create_test_record("cheap", 40.70, -74.00, 4.50, 1),
            create_test_record("five", 40.71, -74.00, 5.00, 2),
            create_test_record("seven", 40.72, -74.00, 7.00, 3),
            create_test_record("pricey", 40.73, -74.00, 8.50, 4),
        ])
        .await;

    let all = storage.list_prices(PriceRange::default()).await.unwrap();
    assert_eq!(all.len(), 4);

    let ranged = storage.list_prices(PriceRange::new(Some(5.0), Some(7.0))).await.unwrap();
    let ids: Vec<&str> = ranged.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["five", "seven"]);
}

#[tokio::test]
async fn box_query_is_exclusive() {
    let storage = MemoryStorage::new();
    storage
        .insert_raw(vec![
            create_test_record("inside", 40.7128, -74.0060, 6.0, 1),
            create_test_record("edge", 40.7228, -74.0060, 6.0, 2),
            create_test_record("outside", 40.80, -74.0060, 6.0, 3),
        ])
        .await;
    let bbox = BoundingBox::around(Coordinate { lat: 40.7128, lon: -74.0060 }, 1.0);
    let hits = storage.prices_in_box(&bbox).await.unwrap();
    let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"inside"));
    assert!(!ids.contains(&"outside"));
}

#[tokio::test]
async fn backend_dispatches_to_memory() {
    let backend = StorageBackend::new_memory();
    assert_eq!(backend.kind(), "memory");
    for rec in sample_price_records() {
        backend.insert_price(rec).await.unwrap();
    }
    assert_eq!(backend.count_prices().await.unwrap(), 3);
    let listed = backend.list_prices(PriceRange::new(None, Some(6.0))).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Joe's Deli");
}

#[tokio::test]
async fn clones_share_rows() {
    let storage = MemoryStorage::new();
    let clone = storage.clone();
    clone.insert_price(create_new_record("Shared", 40.0, -73.0, 5.0)).await.unwrap();
    assert_eq!(storage.count_prices().await.unwrap(), 1);
}
