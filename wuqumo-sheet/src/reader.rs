//! File-backed sheet source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use wuqumo_core::constants::SHEET_COLUMNS;
use wuqumo_core::error::{Result, WuqumoError};
use wuqumo_core::traits::SheetSource;
use wuqumo_core::types::SheetRow;

use crate::parse::split_records;

/// Reads the transcode sheet from a file on disk.
///
/// Every `load` re-reads the whole file, so the refresher always sees the
/// sheet's current content. Validation is all-or-nothing: one malformed
/// row fails the entire load.
#[derive(Clone, Debug)]
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    /// Creates a reader for the sheet at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the sheet path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SheetSource for SheetReader {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<SheetRow>> {
        let contents = fs::read_to_string(&self.path).await?;

        let records = split_records(&contents)?;

        let mut rows = Vec::with_capacity(records.len());
        for (line, fields) in records {
            if fields.len() != SHEET_COLUMNS {
                return Err(WuqumoError::ColumnCountMismatch {
                    line,
                    expected: SHEET_COLUMNS,
                    actual: fields.len(),
                });
            }
            rows.push(SheetRow::new(line, fields));
        }

        debug!(rows = rows.len(), "sheet loaded");
        Ok(rows)
    }
}
