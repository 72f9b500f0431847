//! Shared constants for sandwich-map.
//!
//! Centralizes magic numbers used by more than one crate.

/// Degrees of latitude/longitude per unit of search radius.
pub const DEGREES_PER_RADIUS_UNIT: f64 = 0.01;

/// Kilometres per degree used by the planar distance approximation.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Radius applied when the caller does not specify one.
pub const DEFAULT_SEARCH_RADIUS: f64 = 1.0;

/// Map centre when there are no records to average (Midtown Manhattan).
pub const DEFAULT_MAP_CENTER_LAT: f64 = 40.755;

/// Map centre when there are no records to average (Midtown Manhattan).
pub const DEFAULT_MAP_CENTER_LON: f64 = -73.978;

/// Zoom level for the overview map.
pub const OVERVIEW_ZOOM: u8 = 13;

/// Zoom level when the map is centred on a search result.
pub const SEARCH_RESULT_ZOOM: u8 = 16;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default timeout for a single geocoding request.
pub const GEOCODER_TIMEOUT_SECS: u64 = 5;

/// Maximum number of toppings accepted in one bagel quote (DoS protection).
pub const MAX_BAGEL_TOPPINGS: usize = 32;
