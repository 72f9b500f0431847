use std::sync::Arc;

use anyhow::Result;
use sandwich_map_http::{create_router, AppState};
use sandwich_map_service::{BagelService, PriceService};

use crate::{build_geocoder, open_storage, seed_enabled};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let storage = open_storage().await?;
    let geocoder = build_geocoder()?;

    let price_service = Arc::new(PriceService::new(Arc::clone(&storage), geocoder));
    let bagel_service = Arc::new(BagelService::new(Arc::clone(&storage)));

    if seed_enabled() {
        price_service.seed_if_empty().await?;
        bagel_service.seed_if_empty().await?;
    } else {
        tracing::info!("SANDWICH_MAP_SEED disabled, skipping sample data");
    }

    let state = Arc::new(AppState { price_service, bagel_service });
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!(backend = storage.kind(), "Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
