//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use wuqumo_core::types::TranscodeEntry;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

type Result<T> = std::result::Result<T, ApiError>;

/// GET /mapping
///
/// The whole LCP ↔ wuqumo mapping table, in sheet order. Empty array
/// before the first load.
pub async fn get_mapping(State(state): State<Arc<AppState>>) -> Json<Vec<TranscodeEntry>> {
    let entries = state.cache.all();
    debug!(entries = entries.len(), "serving full mapping");
    Json(entries)
}

/// GET /bylcp/:id
pub async fn get_by_lcp(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TranscodeEntry>> {
    let entry = state.cache.get_by_lcp(&id)?;
    Ok(Json(entry))
}

/// GET /bywuqumo/:id
pub async fn get_by_wuqumo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TranscodeEntry>> {
    let entry = state.cache.get_by_wuqumo(&id)?;
    Ok(Json(entry))
}

static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let start = START_TIME.get_or_init(Instant::now);

    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: start.elapsed().as_secs(),
        entries: state.cache.len(),
    })
}
