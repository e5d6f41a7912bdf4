//! Common traits for the wuqumo service.
//!
//! These traits define the seams between the cache core and its
//! collaborators, enabling alternative sources and deterministic tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::SheetRow;

/// Interface for loading raw transcode sheet rows.
///
/// Implementations might read:
/// - A delimited file on disk (the production loader)
/// - A fixed in-memory table (for tests)
///
/// The contract is all-or-nothing: if any row fails validation the whole
/// load fails and nothing from it may be installed.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Loads every row of the sheet.
    ///
    /// Each returned row carries exactly
    /// [`SHEET_COLUMNS`](crate::constants::SHEET_COLUMNS) fields.
    async fn load(&self) -> Result<Vec<SheetRow>>;
}
