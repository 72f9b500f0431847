mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sandwich_map_core::{env_parse_with_default, env_string, DEFAULT_SEARCH_RADIUS};
use sandwich_map_geocoding::{GeocoderConfig, NominatimClient};
use sandwich_map_storage::StorageBackend;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sandwich-map")]
#[command(about = "NYC sandwich price map with geocoding and nearby search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(short, long, default_value = "5003")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Print stored price records as JSON
    List {
        #[arg(long)]
        min_price: Option<f64>,
        #[arg(long)]
        max_price: Option<f64>,
        /// Keep only the freshest record per location
        #[arg(long)]
        dedup: bool,
    },
    /// Print records near a coordinate, closest first
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_RADIUS)]
        radius: f64,
        /// `planar` or `haversine`
        #[arg(short, long, default_value = "planar")]
        metric: String,
    },
    /// Resolve an address to coordinates
    Geocode { address: String },
    /// Insert sample records into an empty store
    Seed,
}

/// Connects to `DATABASE_URL`, or falls back to the in-memory backend.
pub(crate) async fn open_storage() -> Result<Arc<StorageBackend>> {
    match env_string("DATABASE_URL") {
        Some(url) => {
            let storage = StorageBackend::new_postgres(&url).await?;
            tracing::info!("Connected to PostgreSQL");
            Ok(Arc::new(storage))
        },
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage (data is not persisted)");
            Ok(Arc::new(StorageBackend::new_memory()))
        },
    }
}

pub(crate) fn build_geocoder() -> Result<Arc<NominatimClient>> {
    let client = NominatimClient::new(GeocoderConfig::from_env())?;
    tracing::debug!(base_url = client.base_url(), "geocoder configured");
    Ok(Arc::new(client))
}

pub(crate) fn seed_enabled() -> bool {
    env_parse_with_default("SANDWICH_MAP_SEED", true)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::List { min_price, max_price, dedup } => {
            commands::query::run_list(min_price, max_price, dedup).await
        },
        Commands::Nearby { lat, lon, radius, metric } => {
            commands::query::run_nearby(lat, lon, radius, &metric).await
        },
        Commands::Geocode { address } => commands::query::run_geocode(&address).await,
        Commands::Seed => commands::seed::run().await,
    }
}
