use axum::{
    Json,
    extract::State,
};
use common::showcase::{ShowcasePage, showcase_page};
use serde::Deserialize;

use crate::extract::ApiQuery;
use crate::state::AppState;

const DEFAULT_PER_VIEW: usize = 3;

#[derive(Debug, Deserialize)]
pub struct ShowcaseParams {
    position: Option<usize>,
    per_view: Option<usize>,
}

/// GET /api/tradespeople
pub async fn showcase_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ShowcaseParams>,
) -> Json<ShowcasePage> {
    Json(showcase_page(
        &state.catalog.tradespeople,
        params.position.unwrap_or(0),
        params.per_view.unwrap_or(DEFAULT_PER_VIEW),
    ))
}
