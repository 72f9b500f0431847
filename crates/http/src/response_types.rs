//! Response types (Serialize)

use sandwich_map_core::{
    map_center, MapMarker, NearbyMatch, PriceRange, PriceRecord, OVERVIEW_ZOOM,
    SEARCH_RESULT_ZOOM,
};
use sandwich_map_geocoding::GeocodeResult;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Unknown kinds render as errors.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("success") => Self::Success,
            _ => Self::Error,
        }
    }
}

/// One-shot message shown at the top of the map page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Error }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NoticeKind::Success }
    }
}

/// Everything the embedded map page needs to draw itself.
#[derive(Debug, Serialize)]
pub struct MapView {
    pub sandwiches: Vec<MapMarker>,
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub search_query: Option<String>,
    pub search_result: Option<GeocodeResult>,
    pub nearby: Vec<NearbyMatch>,
    pub notice: Option<Notice>,
}

impl MapView {
    /// Overview of deduplicated records, centred on their mean position.
    pub fn overview(records: Vec<PriceRecord>, range: PriceRange) -> Self {
        let center = map_center(&records);
        Self {
            sandwiches: records.into_iter().map(MapMarker::from).collect(),
            center_lat: center.lat,
            center_lon: center.lon,
            zoom: OVERVIEW_ZOOM,
            min_price: range.min,
            max_price: range.max,
            search_query: None,
            search_result: None,
            nearby: Vec::new(),
            notice: None,
        }
    }

    /// Re-centres on a search hit at street zoom.
    pub fn focused_on(mut self, hit: GeocodeResult, nearby: Vec<NearbyMatch>) -> Self {
        self.center_lat = hit.lat;
        self.center_lon = hit.lon;
        self.zoom = SEARCH_RESULT_ZOOM;
        self.search_result = Some(hit);
        self.nearby = nearby;
        self
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice;
        self
    }
}
