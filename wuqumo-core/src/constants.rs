//! Schema and cache constants for the wuqumo service.

use std::time::Duration;

/// Number of fields every transcode sheet row must carry.
///
/// The sheet has 11 columns; only [`WUQUMO_FIELD`] and [`LCP_FIELD`] are
/// semantically used, but a row missing any column fails the whole load.
pub const SHEET_COLUMNS: usize = 11;

/// Zero-based position of the wuqumo code within a sheet row.
pub const WUQUMO_FIELD: usize = 0;

/// Zero-based position of the LCP code within a sheet row.
///
/// Rows with an empty LCP field are dropped before numbering.
pub const LCP_FIELD: usize = 2;

/// How long an installed snapshot stays fresh before the refresher
/// rebuilds it from the sheet.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Sheet location used when `CSV_FILE` is unset or empty.
pub const DEFAULT_SHEET_PATH: &str = "./transcode_sheet.csv";

/// Port the API server binds to by default.
pub const DEFAULT_PORT: u16 = 8000;
