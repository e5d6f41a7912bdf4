//! # Wuqumo Cache
//!
//! The refresh cache at the heart of the wuqumo service: it holds exactly
//! one immutable snapshot of the transcode table at a time, serves
//! concurrent two-key lookups against it, and swaps in a freshly built
//! snapshot whenever the current one's TTL elapses.
//!
//! - [`Snapshot`]: an immutable table built in one pass from sheet rows
//! - [`MappingCache`]: the shared handle readers and the refresher use
//! - [`Refresher`]: the background loop that rebuilds snapshots on expiry
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use wuqumo_cache::{MappingCache, Snapshot};
//! use wuqumo_core::SheetRow;
//!
//! let mut fields = vec![String::new(); 11];
//! fields[0] = "W1".into();
//! fields[2] = "L1".into();
//! let rows = vec![SheetRow::new(1, fields)];
//!
//! let cache = MappingCache::new();
//! cache.install(Snapshot::from_rows(&rows), Duration::from_secs(300));
//! assert_eq!(cache.get_by_lcp("L1").unwrap().wuqumo, "W1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod refresh;
mod snapshot;

pub use cache::MappingCache;
pub use refresh::Refresher;
pub use snapshot::Snapshot;
