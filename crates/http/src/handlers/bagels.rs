use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use sandwich_map_core::{BagelQuote, BagelVendor, NewBagelVendor};
use sandwich_map_service::ServiceError;

use crate::api_error::ApiError;
use crate::query_types::{NewVendorRequest, QuoteQuery};
use crate::AppState;

pub async fn list_vendors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BagelVendor>>, ApiError> {
    Ok(Json(state.bagel_service.list_vendors().await?))
}

pub async fn create_vendor(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewVendorRequest>,
) -> Result<(StatusCode, Json<BagelVendor>), ApiError> {
    let new =
        NewBagelVendor::new(req.name, req.base_price, req.toppings).map_err(ServiceError::from)?;
    let vendor = state.bagel_service.add_vendor(new).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

pub async fn quote(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<Vec<BagelQuote>>, ApiError> {
    Ok(Json(state.bagel_service.quote(&query.selected()).await?))
}
