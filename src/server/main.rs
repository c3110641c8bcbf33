//! Place resolution server.
//!
//! Serves single and batch geocoding for itinerary activities plus route
//! distance over resolved points.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder::api::{router, AppState};
use wayfinder::cities::{CityNormalizer, CityTable};
use wayfinder::config::Config;
use wayfinder::provider::{NominatimSearch, PlaceSearch, ProviderChain, StaticCentroids};
use wayfinder::Resolver;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Itinerary place resolution server")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Extra city table merged over the built-in one
    #[arg(long)]
    cities: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(cities) = args.cities {
        config.cities.path = Some(cities);
    }

    info!("Wayfinder Server");

    let mut table = CityTable::builtin();
    if let Some(path) = &config.cities.path {
        table.load_file(path)?;
    }
    let table = Arc::new(table);
    info!("City table has {} aliases", table.len());

    let remote: Arc<dyn PlaceSearch> = Arc::new(NominatimSearch::new(&config.provider)?);
    info!("Search provider at {}", config.provider.base_url);

    // Known cities resolve from the table; others ask the remote provider
    let table_centroids: Arc<dyn PlaceSearch> = Arc::new(StaticCentroids::new(table.clone()));
    let centroids: Arc<dyn PlaceSearch> =
        Arc::new(ProviderChain::new(vec![table_centroids, remote.clone()]));

    let resolver = Resolver::new(
        remote,
        centroids,
        CityNormalizer::new(table),
        config.resolver.clone(),
    )
    .with_batch_config(config.batch.clone());

    let app = router(Arc::new(AppState { resolver }));

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
