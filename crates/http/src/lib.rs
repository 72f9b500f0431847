//! HTTP API server for sandwich-map.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_copy_implementations, reason = "Types may grow")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sandwich_map_service::{BagelService, PriceService};
use tower_http::trace::TraceLayer;

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for sharing across handlers.
pub struct AppState {
    /// Price records, nearby search and geocoding
    pub price_service: Arc<PriceService>,
    /// Bagel menus and quotes
    pub bagel_service: Arc<BagelService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::map::home))
        .route("/search", get(handlers::map::search_get).post(handlers::map::search_post))
        .route("/add", post(handlers::map::add_price))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/geocode", get(handlers::prices::geocode))
        .route(
            "/api/sandwiches",
            get(handlers::prices::list_prices).post(handlers::prices::create_price),
        )
        .route("/api/sandwiches/nearby", get(handlers::prices::nearby_prices))
        .route("/api/sandwiches/{id}", get(handlers::prices::get_price))
        .route(
            "/api/bagels/vendors",
            get(handlers::bagels::list_vendors).post(handlers::bagels::create_vendor),
        )
        .route("/api/bagels/quote", get(handlers::bagels::quote))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
