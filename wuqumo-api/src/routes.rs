//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Mapping table
        .route("/mapping", get(handlers::get_mapping))
        // Point lookups by either key
        .route("/bywuqumo/:id", get(handlers::get_by_wuqumo))
        .route("/bylcp/:id", get(handlers::get_by_lcp))
        .with_state(state)
}
