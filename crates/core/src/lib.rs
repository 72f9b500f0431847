//! Core types and logic for sandwich-map
//!
//! This crate contains domain types shared across all other crates, plus the
//! pure computations behind the map: per-location deduplication, nearby
//! search, price tiers and bagel quotes.

mod bagel;
mod constants;
mod dedup;
#[cfg(test)]
mod dedup_tests;
mod env_config;
mod error;
mod geo;
mod map_view;
mod nearby;
mod price;
mod tier;

pub use bagel::*;
pub use constants::*;
pub use dedup::*;
pub use env_config::*;
pub use error::*;
pub use geo::*;
pub use map_view::*;
pub use nearby::*;
pub use price::*;
pub use tier::*;
