//! Errors from the Nominatim geocoding client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// No answer arrived: connect failure or timeout.
    #[error("geocoding service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),
    /// Non-2xx answer.
    #[error("geocoding service answered {status}: {body}")]
    Rejected { status: u16, body: String },
    /// 2xx answer that is not a list of search hits.
    #[error("unexpected geocoding response: {0}")]
    MalformedResponse(String),
    #[error("invalid coordinate in geocoding response: {0}")]
    InvalidCoordinate(String),
    #[error("geocoder client setup failed: {0}")]
    ClientInit(#[source] reqwest::Error),
}
