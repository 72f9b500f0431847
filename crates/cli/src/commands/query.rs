use anyhow::{Context, Result};
use sandwich_map_core::{Coordinate, DistanceMetric, NearbyQuery, PriceRange};
use sandwich_map_geocoding::Geocoder;
use sandwich_map_service::PriceService;

use crate::{build_geocoder, open_storage};

async fn price_service() -> Result<PriceService> {
    Ok(PriceService::new(open_storage().await?, build_geocoder()?))
}

pub(crate) async fn run_list(min: Option<f64>, max: Option<f64>, dedup: bool) -> Result<()> {
    let service = price_service().await?;
    let range = PriceRange::new(min, max);
    let records =
        if dedup { service.map_records(range).await? } else { service.list(range).await? };
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) async fn run_nearby(lat: f64, lon: f64, radius: f64, metric: &str) -> Result<()> {
    let metric: DistanceMetric = metric.parse()?;
    let query = NearbyQuery::new(Coordinate::new(lat, lon)?)
        .with_radius(radius)?
        .with_metric(metric);
    let matches = price_service().await?.nearby(&query).await?;
    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}

pub(crate) async fn run_geocode(address: &str) -> Result<()> {
    let geocoder = build_geocoder()?;
    let hit = geocoder
        .geocode(address)
        .await?
        .with_context(|| format!("Address not found: {address}"))?;
    println!("{}", serde_json::to_string_pretty(&hit)?);
    Ok(())
}
