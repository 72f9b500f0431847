//! Distance functions and bounding boxes over decimal-degree coordinates.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, DEGREES_PER_RADIUS_UNIT, EARTH_RADIUS_KM, KM_PER_DEGREE};

/// How distances from the search centre are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Euclidean distance in degrees scaled by 111 km/degree.
    #[default]
    Planar,
    /// Great-circle distance.
    Haversine,
}

impl DistanceMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planar => "planar",
            Self::Haversine => "haversine",
        }
    }

    #[must_use]
    pub fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        match self {
            Self::Planar => planar_distance_km(from, to),
            Self::Haversine => haversine_km(from, to),
        }
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "planar" => Ok(Self::Planar),
            "haversine" | "geodesic" => Ok(Self::Haversine),
            other => Err(crate::CoreError::InvalidInput(format!("unknown distance metric: {other}"))),
        }
    }
}

/// `sqrt(dlat² + dlon²) * 111`. Cheap, and only meaningful at city scale.
#[must_use]
pub fn planar_distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let dlat = to.lat - from.lat;
    let dlon = to.lon - from.lon;
    dlat.hypot(dlon) * KM_PER_DEGREE
}

#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();
    let a = ((dlat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Axis-aligned box of `radius * 0.01` degrees around a centre.
///
/// Bounds are exclusive on every side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn around(center: Coordinate, radius: f64) -> Self {
        let half = DEGREES_PER_RADIUS_UNIT * radius;
        Self {
            min_lat: center.lat - half,
            max_lat: center.lat + half,
            min_lon: center.lon - half,
            max_lon: center.lon + half,
        }
    }

    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat > self.min_lat && lat < self.max_lat && lon > self.min_lon && lon < self.max_lon
    }
}
