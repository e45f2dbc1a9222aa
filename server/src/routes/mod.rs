pub mod health;
pub mod jobs;
pub mod search;
pub mod showcase;
pub mod signup;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "Trades Job Board API\n\nEndpoints:\n  GET  /api/categories            - Browse categories\n  GET  /api/jobs?category=&q=&job_type= - Filter listings\n  GET  /api/jobs/{id}              - Listing details\n  GET  /search?q=<keywords>        - Ranked search\n  GET  /api/tradespeople           - Trades showcase\n  POST /api/signup                 - Start account creation\n  DELETE /api/signup/{session}     - Discard a signup session\n\nExample:\n  curl 'http://127.0.0.1:3000/api/jobs?category=construction&job_type=contract'"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/categories", get(jobs::list_categories))
        .route("/api/categories/{id}", get(jobs::get_category))
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/{id}", get(jobs::get_job))
        .route("/search", get(search::search_handler))
        .route("/api/tradespeople", get(showcase::showcase_handler))
        .route("/api/signup", post(signup::start_handler))
        .route("/api/signup/options", get(signup::options_handler))
        .route(
            "/api/signup/{session}",
            get(signup::get_handler).delete(signup::delete_handler),
        )
        .route("/api/signup/{session}/actions", post(signup::action_handler))
        .route("/go/{network}", get(signup::redirect_handler))
        .with_state(state)
}
