use std::sync::Arc;

use anyhow::Result;
use sandwich_map_service::{BagelService, PriceService};

use crate::{build_geocoder, open_storage};

pub(crate) async fn run() -> Result<()> {
    let storage = open_storage().await?;
    let prices = PriceService::new(Arc::clone(&storage), build_geocoder()?);
    let bagels = BagelService::new(storage);

    let price_count = prices.seed_if_empty().await?;
    let vendor_count = bagels.seed_if_empty().await?;
    println!("Inserted {price_count} price records and {vendor_count} bagel vendors");
    Ok(())
}
