use std::time::Duration;

use async_trait::async_trait;
use sandwich_map_core::{env_parse_with_default, env_string, Coordinate, GEOCODER_TIMEOUT_SECS};
use serde::Deserialize;

use crate::error::GeocodeError;
use crate::{GeocodeResult, Geocoder};

/// Default public Nominatim endpoint.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
/// Nominatim's usage policy requires an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "NYC Sandwich Price Tracker (contact@example.com)";

const CITY_SUFFIX: &str = ", New York, NY";

/// Connection settings for [`NominatimClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocoderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(GEOCODER_TIMEOUT_SECS),
        }
    }
}

impl GeocoderConfig {
    /// Reads `SANDWICH_MAP_GEOCODER_URL`, `SANDWICH_MAP_USER_AGENT` and
    /// `SANDWICH_MAP_GEOCODER_TIMEOUT_SECS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_string("SANDWICH_MAP_GEOCODER_URL").unwrap_or(defaults.base_url),
            user_agent: env_string("SANDWICH_MAP_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout: Duration::from_secs(env_parse_with_default(
                "SANDWICH_MAP_GEOCODER_TIMEOUT_SECS",
                GEOCODER_TIMEOUT_SECS,
            )),
        }
    }
}

/// Client for a Nominatim `/search` endpoint.
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for NominatimClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimClient").field("base_url", &self.base_url).finish()
    }
}

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    display_name: String,
}

impl NominatimClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(GeocodeError::ClientInit)?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn search(&self, query: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query), ("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(GeocodeError::Rejected {
                status: status.as_u16(),
                body: truncate(&body, 200).to_owned(),
            });
        }

        let body = response.text().await?;
        let hits: Vec<SearchHit> = serde_json::from_str(&body).map_err(|e| {
            GeocodeError::MalformedResponse(format!("{e} (body: {})", truncate(&body, 200)))
        })?;

        let Some(first) = hits.into_iter().next() else {
            return Ok(None);
        };
        Ok(Some(parse_hit(first)?))
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> Result<Option<GeocodeResult>, GeocodeError> {
        let query = with_city_suffix(address);
        tracing::debug!(query = %query, "geocoding address");
        self.search(&query).await
    }
}

fn parse_hit(hit: SearchHit) -> Result<GeocodeResult, GeocodeError> {
    let lat: f64 = hit
        .lat
        .trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidCoordinate(format!("lat '{}'", hit.lat)))?;
    let lon: f64 = hit
        .lon
        .trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidCoordinate(format!("lon '{}'", hit.lon)))?;
    let point =
        Coordinate::new(lat, lon).map_err(|e| GeocodeError::InvalidCoordinate(e.to_string()))?;
    Ok(GeocodeResult { lat: point.lat, lon: point.lon, display_name: hit.display_name })
}

/// Appends ", New York, NY" unless the address already mentions New York.
///
/// The check is a plain substring test on the lowercased address.
#[must_use]
pub fn with_city_suffix(address: &str) -> String {
    let lower = address.to_lowercase();
    if lower.contains("new york") || lower.contains("ny") {
        address.to_owned()
    } else {
        format!("{address}{CITY_SUFFIX}")
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
