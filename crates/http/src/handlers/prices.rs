use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use sandwich_map_core::{NearbyMatch, PriceRecord};
use sandwich_map_geocoding::GeocodeResult;
use serde_json::Value;

use crate::api_error::ApiError;
use crate::query_types::{AddressQuery, NearbyParams, PriceFilterQuery};
use crate::response_types::CreatedResponse;
use crate::AppState;

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddressQuery>,
) -> Result<Json<GeocodeResult>, ApiError> {
    let address = query.address.trim();
    if address.is_empty() {
        return Err(ApiError::BadRequest("Address parameter is required".to_owned()));
    }
    state
        .price_service
        .locate(address)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Address not found".to_owned()))
}

pub async fn list_prices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PriceFilterQuery>,
) -> Result<Json<Vec<PriceRecord>>, ApiError> {
    let range = query.strict_range()?;
    Ok(Json(state.price_service.list(range).await?))
}

/// Takes the raw body so an empty or non-object payload gets the same
/// `{"error": …}` shape as every other validation failure.
pub async fn create_price(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let payload: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?
    };
    let record = state.price_service.add_from_api(&payload).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { success: true, id: record.id })))
}

pub async fn get_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PriceRecord>, ApiError> {
    Ok(Json(state.price_service.get(&id).await?))
}

pub async fn nearby_prices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<Vec<NearbyMatch>>, ApiError> {
    let query = params.to_query()?;
    Ok(Json(state.price_service.nearby(&query).await?))
}
