//! Sample rows inserted into an empty store on first start.

use sandwich_map_core::{Coordinate, NewBagelVendor, NewPriceRecord};

/// Three Manhattan delis used to populate an empty map.
#[must_use]
pub fn sample_price_records() -> Vec<NewPriceRecord> {
    let rows = [
        ("Joe's Deli", "123 Broadway, New York, NY", 40.728, -73.991, 5.99),
        ("East Side Bites", "456 Madison Ave, New York, NY", 40.732, -73.987, 6.50),
        ("West Village Deli", "789 Greenwich St, New York, NY", 40.735, -74.005, 7.25),
    ];
    rows.into_iter()
        .filter_map(|(name, address, lat, lon, price)| {
            NewPriceRecord::new(name, address, Coordinate { lat, lon }, price).ok()
        })
        .collect()
}

/// Two bagel shops with overlapping topping menus.
#[must_use]
pub fn sample_bagel_vendors() -> Vec<NewBagelVendor> {
    let menus: [(&str, f64, &[(&str, f64)]); 2] = [
        (
            "Broadway Bagels",
            1.75,
            &[("cream cheese", 1.50), ("lox", 5.00), ("capers", 0.50), ("tomato", 0.75)],
        ),
        (
            "Madison Bagel Co",
            1.50,
            &[("cream cheese", 1.75), ("lox", 4.50), ("onion", 0.50), ("butter", 0.0)],
        ),
    ];
    menus
        .into_iter()
        .filter_map(|(name, base, toppings)| {
            NewBagelVendor::new(name, base, toppings.iter().copied()).ok()
        })
        .collect()
}
