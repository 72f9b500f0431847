//! Tests for freshest_per_location.

use chrono::{DateTime, TimeZone, Utc};

use crate::{freshest_per_location, LocationKey, PriceRecord};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn record(id: &str, lat: f64, lon: f64, price: f64, t: i64) -> PriceRecord {
    PriceRecord {
        id: id.to_owned(),
        name: format!("Deli {id}"),
        address: "123 Broadway, New York, NY".to_owned(),
        lat,
        lon,
        price,
        last_updated: at(t),
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(freshest_per_location(Vec::new()).is_empty());
}

#[test]
fn newer_record_at_same_location_wins() {
    let out = freshest_per_location(vec![
        record("a", 40.7128, -74.0060, 6.0, 1),
        record("b", 40.7128, -74.0060, 7.0, 2),
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].price, 7.0);
    assert_eq!(out[0].id, "b");
}

#[test]
fn older_record_arriving_later_does_not_replace() {
    let out = freshest_per_location(vec![
        record("new", 40.7128, -74.0060, 7.0, 5),
        record("old", 40.7128, -74.0060, 6.0, 1),
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "new");
}

#[test]
fn tie_keeps_first_seen() {
    let out = freshest_per_location(vec![
        record("first", 40.0, -73.0, 6.0, 3),
        record("second", 40.0, -73.0, 9.0, 3),
    ]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "first");
}

#[test]
fn distinct_locations_all_survive() {
    let out = freshest_per_location(vec![
        record("a", 40.728, -73.991, 5.99, 1),
        record("b", 40.732, -73.987, 6.50, 1),
        record("c", 40.735, -74.005, 7.25, 1),
    ]);
    let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn nearby_but_unequal_coordinates_are_distinct() {
    let out = freshest_per_location(vec![
        record("a", 40.7128, -74.0060, 6.0, 1),
        record("b", 40.71280001, -74.0060, 7.0, 2),
    ]);
    assert_eq!(out.len(), 2);
}

#[test]
fn negative_zero_shares_key_with_zero() {
    assert_eq!(LocationKey::new(-0.0, 0.0), LocationKey::new(0.0, -0.0));
    let out = freshest_per_location(vec![record("a", 0.0, 0.0, 5.0, 1), record("b", -0.0, -0.0, 6.0, 2)]);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, "b");
}

#[test]
fn three_way_collision_keeps_latest() {
    let out = freshest_per_location(vec![
        record("t2", 40.0, -73.0, 6.0, 2),
        record("t9", 40.0, -73.0, 8.0, 9),
        record("t4", 40.0, -73.0, 7.0, 4),
        record("other", 41.0, -73.0, 5.0, 1),
    ]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "t9");
    assert_eq!(out[1].id, "other");
}
