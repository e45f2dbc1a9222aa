//! Trades Job Board Server
//!
//! Serves category browsing, listing search, the trades showcase and the
//! signup dialogs as a JSON API using Axum.

mod config;
mod errors;
mod extract;
mod index;
mod routes;
mod state;

use anyhow::{Context, Result};
use common::Catalog;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},common={level}",
                env!("CARGO_PKG_NAME"),
                level = config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Trades Job Board v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.data_dir {
        Some(dir) => Catalog::load_dir(dir)?,
        None => Catalog::embedded()?,
    };
    info!(
        "Loaded {} categories, {} listings, {} tradespeople",
        catalog.categories.len(),
        catalog.listings.len(),
        catalog.tradespeople.len()
    );

    if config.network_links.is_empty() {
        warn!("No AFFILIATE_URL_* variables set; network selection will not redirect");
    }

    let state = AppState::new(catalog, &config).context("Failed to build search index")?;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST/PORT do not form a valid socket address")?;
    info!("Server running at http://{addr}");
    info!("Try: curl 'http://{addr}/api/jobs?category=construction'");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
