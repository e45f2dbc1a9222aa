//! The static dataset behind the site: categories, listings and the trades showcase.
//!
//! The default data is compiled into the binary. A data directory can
//! override individual files.

use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{Category, JobListing, Tradesperson};

const CATEGORIES_FILE: &str = "categories.json";
const LISTINGS_FILE: &str = "listings.json";
const TRADESPEOPLE_FILE: &str = "tradespeople.json";

const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");
const EMBEDDED_LISTINGS: &str = include_str!("../data/listings.json");
const EMBEDDED_TRADESPEOPLE: &str = include_str!("../data/tradespeople.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub listings: Vec<JobListing>,
    pub tradespeople: Vec<Tradesperson>,
}

impl Catalog {
    /// Builds a catalog from in-memory records, checking id uniqueness.
    pub fn new(
        categories: Vec<Category>,
        listings: Vec<JobListing>,
        tradespeople: Vec<Tradesperson>,
    ) -> Result<Self, CatalogError> {
        ensure_unique("category", categories.iter().map(|c| c.id.as_str()))?;
        ensure_unique("listing", listings.iter().map(|l| l.id.as_str()))?;
        ensure_unique("tradesperson", tradespeople.iter().map(|t| t.id.as_str()))?;

        Ok(Catalog {
            categories,
            listings,
            tradespeople,
        })
    }

    /// The dataset shipped with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Catalog::new(
            parse(CATEGORIES_FILE, EMBEDDED_CATEGORIES)?,
            parse(LISTINGS_FILE, EMBEDDED_LISTINGS)?,
            parse(TRADESPEOPLE_FILE, EMBEDDED_TRADESPEOPLE)?,
        )
    }

    /// Loads each data file from `dir`, falling back to the embedded copy
    /// for files that are absent.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        info!("Loading catalog from {:?}", dir);
        Catalog::new(
            load_or_embedded(dir, CATEGORIES_FILE, EMBEDDED_CATEGORIES)?,
            load_or_embedded(dir, LISTINGS_FILE, EMBEDDED_LISTINGS)?,
            load_or_embedded(dir, TRADESPEOPLE_FILE, EMBEDDED_TRADESPEOPLE)?,
        )
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn listing(&self, id: &str) -> Option<&JobListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn tradesperson(&self, id: &str) -> Option<&Tradesperson> {
        self.tradespeople.iter().find(|t| t.id == id)
    }

    /// Display name for a category id; unknown ids are shown as-is.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or(id)
    }

    /// Number of listings actually filed under a category.
    pub fn live_count(&self, id: &str) -> usize {
        self.listings
            .iter()
            .filter(|l| l.category.as_deref() == Some(id))
            .count()
    }
}

fn parse<T: DeserializeOwned>(file: &str, content: &str) -> Result<Vec<T>, CatalogError> {
    serde_json::from_str(content).map_err(|source| CatalogError::Json {
        file: file.to_string(),
        source,
    })
}

fn load_or_embedded<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
    embedded: &str,
) -> Result<Vec<T>, CatalogError> {
    let path = dir.join(file);
    if !path.exists() {
        debug!("{:?} not found, using embedded {}", path, file);
        return parse(file, embedded);
    }

    let content = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
        path: path.clone(),
        source,
    })?;
    let records: Vec<T> = parse(file, &content)?;
    info!("Loaded {} records from {:?}", records.len(), path);
    Ok(records)
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
