//! # Wuqumo Sheet
//!
//! The transcode sheet loader: reads the delimited sheet file and yields
//! validated raw rows for the cache to build its snapshot from.
//!
//! The sheet is comma-delimited text with exactly 11 fields per row.
//! Quoting follows the usual conventions (double quotes around fields,
//! `""` as an escaped quote). A row with the wrong field count fails the
//! whole load — partial sheets are never handed to the cache.
//!
//! ## Example
//!
//! ```rust,ignore
//! use wuqumo_core::SheetSource;
//! use wuqumo_sheet::SheetReader;
//!
//! let reader = SheetReader::new("./transcode_sheet.csv");
//! let rows = reader.load().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod parse;
mod reader;

pub use reader::SheetReader;
