//! Bounding-box nearby search with distance ranking.

use serde::Serialize;

use crate::{BoundingBox, Coordinate, CoreError, DistanceMetric, PriceRecord, DEFAULT_SEARCH_RADIUS};

/// Parameters of a nearby search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub center: Coordinate,
    /// Unitless scale; the box half-width is `radius * 0.01` degrees.
    pub radius: f64,
    pub metric: DistanceMetric,
}

impl NearbyQuery {
    /// Planar query with the default radius.
    #[must_use]
    pub fn new(center: Coordinate) -> Self {
        Self { center, radius: DEFAULT_SEARCH_RADIUS, metric: DistanceMetric::Planar }
    }

    /// # Errors
    /// Returns `CoreError::InvalidRadius` unless the radius is finite and positive.
    pub fn with_radius(mut self, radius: f64) -> Result<Self, CoreError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CoreError::InvalidRadius(radius));
        }
        self.radius = radius;
        Ok(self)
    }

    #[must_use]
    pub const fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::around(self.center, self.radius)
    }
}

/// A record inside the search box with its distance from the centre.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyMatch {
    #[serde(flatten)]
    pub record: PriceRecord,
    #[serde(rename = "distance")]
    pub distance_km: f64,
}

/// Selects records inside the query's bounding box and sorts them by distance.
///
/// Records already filtered by the storage layer pass through the same box
/// check, so the result is identical whichever side applied it first.
#[must_use]
pub fn find_nearby<I>(records: I, query: &NearbyQuery) -> Vec<NearbyMatch>
where
    I: IntoIterator<Item = PriceRecord>,
{
    let bbox = query.bounding_box();
    let mut matches: Vec<NearbyMatch> = records
        .into_iter()
        .filter(|r| bbox.contains(r.lat, r.lon))
        .map(|record| {
            let distance_km = query.metric.distance_km(query.center, record.coordinate());
            NearbyMatch { record, distance_km }
        })
        .collect();
    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    matches
}
