//! App state: the shared cache plus environment-derived configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use wuqumo_cache::MappingCache;
use wuqumo_core::constants::{DEFAULT_PORT, DEFAULT_SHEET_PATH, DEFAULT_TTL};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Path to the transcode sheet file.
    pub sheet_path: PathBuf,
    /// How long each installed snapshot stays fresh.
    pub ttl: Duration,
    /// Port the server binds to.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            sheet_path: DEFAULT_SHEET_PATH.into(),
            ttl: DEFAULT_TTL,
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Builds the configuration from the environment.
    ///
    /// Reads `CSV_FILE` (falling back to `./transcode_sheet.csv` when unset
    /// or empty), `CACHE_TTL_SECS`, and `PORT`. A `.env` file is loaded
    /// first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            sheet_path: std::env::var("CSV_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| DEFAULT_SHEET_PATH.into()),
            ttl: std::env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Shared state handed to every request handler.
pub struct AppState {
    /// Server configuration.
    pub config: ApiConfig,
    /// The mapping cache, shared with the background refresher.
    pub cache: Arc<MappingCache>,
}

impl AppState {
    /// Creates the state around an externally owned cache.
    ///
    /// The cache is injected rather than constructed here so the refresher
    /// and the handlers share one instance, and tests can use their own.
    pub fn new(config: ApiConfig, cache: Arc<MappingCache>) -> Self {
        Self { config, cache }
    }
}
