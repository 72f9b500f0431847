//! Map page: an embedded Leaflet document fed by a JSON view model.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::api_error::ApiError;
use crate::response_types::MapView;

/// Embedded HTML for the map page
pub const VIEWER_HTML: &str = include_str!("viewer.html");

const VIEW_MODEL_SLOT: &str = "/*VIEW_MODEL*/null";

/// Renders the map page with `view` inlined into its script block.
pub fn render_map(view: &MapView) -> Result<Response, ApiError> {
    let json = serde_json::to_string(view).map_err(anyhow::Error::from)?;
    let page = VIEWER_HTML.replacen(VIEW_MODEL_SLOT, &script_safe(&json), 1);
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(page))
        .into_response())
}

/// Escapes characters that could close the surrounding `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c").replace('>', "\\u003e").replace('&', "\\u0026")
}
