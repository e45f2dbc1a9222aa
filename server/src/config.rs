use anyhow::{Context, Result};
use common::filter::DEFAULT_PAGE_SIZE;
use common::{Network, NetworkLinks};
use std::path::PathBuf;

/// Server configuration loaded from environment variables (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory with `categories.json`, `listings.json`, `tradespeople.json`.
    /// Unset means the embedded dataset.
    pub data_dir: Option<PathBuf>,
    pub page_size: usize,
    pub rust_log: String,
    pub network_links: NetworkLinks,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => 3000,
        };

        let page_size = match lookup("PAGE_SIZE") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("PAGE_SIZE must be a positive integer, got '{raw}'"))?,
            None => DEFAULT_PAGE_SIZE,
        };

        let mut network_links = NetworkLinks::new();
        for network in Network::ALL {
            if let Some(url) = lookup(&affiliate_key(network)).filter(|u| !u.trim().is_empty()) {
                network_links.insert(network, url.trim());
            }
        }

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            data_dir: lookup("DATA_DIR").map(PathBuf::from),
            page_size,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            network_links,
        })
    }
}

/// `virgin-mobile` -> `AFFILIATE_URL_VIRGIN_MOBILE`
fn affiliate_key(network: Network) -> String {
    format!(
        "AFFILIATE_URL_{}",
        network.as_str().replace('-', "_").to_ascii_uppercase()
    )
}
