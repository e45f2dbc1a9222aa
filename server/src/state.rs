use std::collections::HashMap;
use std::sync::Arc;

use common::{Catalog, NetworkLinks, SignupFlow};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::index::ListingIndex;

/// Default upper bound on concurrently open signup sessions.
pub const MAX_SESSIONS: usize = 10_000;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub index: Arc<ListingIndex>,
    pub network_links: Arc<NetworkLinks>,
    pub page_size: usize,
    pub max_sessions: usize,
    pub sessions: Arc<RwLock<HashMap<Uuid, SignupFlow>>>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: &Config) -> tantivy::Result<Self> {
        let index = ListingIndex::build(&catalog.listings)?;
        Ok(AppState {
            catalog: Arc::new(catalog),
            index: Arc::new(index),
            network_links: Arc::new(config.network_links.clone()),
            page_size: config.page_size,
            max_sessions: MAX_SESSIONS,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        })
    }
}
