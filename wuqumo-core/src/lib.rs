//! # Wuqumo Core
//!
//! Core types, errors, and traits for the wuqumo transcode mapping service.
//!
//! This crate provides the foundational building blocks used by all other
//! wuqumo crates:
//!
//! - **Types**: The transcode entry and raw sheet row models
//! - **Errors**: Error hierarchy with context
//! - **Constants**: Sheet schema and cache defaults
//! - **Traits**: The sheet source contract for loaders
//!
//! ## Example
//!
//! ```rust
//! use wuqumo_core::TranscodeEntry;
//!
//! let entry = TranscodeEntry::new(1, "L001", "W001");
//! let json = serde_json::to_string(&entry).unwrap();
//! assert!(json.contains("\"lcp\":\"L001\""));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{Result, WuqumoError};
pub use traits::*;
pub use types::*;
