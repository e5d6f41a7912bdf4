//! # Wuqumo API Server
//!
//! REST API over the transcode mapping cache.
//!
//! ## Endpoints
//!
//! - `GET /mapping` - The full LCP ↔ wuqumo mapping table
//! - `GET /bywuqumo/:id` - Look up an entry by wuqumo code
//! - `GET /bylcp/:id` - Look up an entry by LCP code
//! - `GET /health` - Service health and entry count
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wuqumo_api::{ApiConfig, ApiServer};
//! use wuqumo_cache::MappingCache;
//!
//! let cache = Arc::new(MappingCache::new());
//! let server = ApiServer::new(ApiConfig::from_env(), cache);
//! server.run(([0, 0, 0, 0], 8000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use wuqumo_cache::MappingCache;

/// API server over a shared mapping cache.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server around the given cache.
    pub fn new(config: ApiConfig, cache: Arc<MappingCache>) -> Self {
        Self {
            state: Arc::new(AppState::new(config, cache)),
        }
    }

    /// Creates the router with all routes and middleware configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address until the process exits.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("wuqumo API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
