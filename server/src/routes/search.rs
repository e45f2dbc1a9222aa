use axum::{
    Json,
    extract::State,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::index::SearchResult;
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 10;

/// API response wrapper
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    query: String,
    total_results: usize,
    results: Vec<SearchResult>,
}

/// Query parameters for search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    limit: Option<usize>,
}

/// Handler for GET /search?q=<keywords>
pub async fn search_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let query_str = params.q.unwrap_or_default();

    if query_str.trim().is_empty() {
        return Ok(Json(SearchResponse {
            query: query_str,
            total_results: 0,
            results: vec![],
        }));
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let results = state
        .index
        .search(&query_str, limit)?
        .ok_or_else(|| AppError::Validation(format!("could not parse query '{query_str}'")))?;

    Ok(Json(SearchResponse {
        query: query_str,
        total_results: results.len(),
        results,
    }))
}
