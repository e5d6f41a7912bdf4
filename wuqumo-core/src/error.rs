//! Error types for the wuqumo service.
//!
//! This module provides the error hierarchy using `thiserror`. Load errors
//! cover everything that can go wrong while reading the transcode sheet;
//! lookup misses are modeled as their own variants so the HTTP layer can
//! map them to kind-specific responses.

use thiserror::Error;

/// Result type alias using `WuqumoError`.
pub type Result<T> = std::result::Result<T, WuqumoError>;

/// Main error type for all wuqumo operations.
#[derive(Debug, Error)]
pub enum WuqumoError {
    // ═══════════════════════════════════════════════════════════════════════════
    // SHEET LOAD ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The transcode sheet could not be read.
    #[error("unable to read transcode sheet: {0}")]
    SheetIo(#[from] std::io::Error),

    /// A row carried the wrong number of fields.
    ///
    /// The whole load fails; partial sheets are never installed.
    #[error("row at line {line}: expected {expected} fields, got {actual}")]
    ColumnCountMismatch {
        /// Source line the offending row starts on (1-based).
        line: usize,
        /// Expected field count ([`crate::constants::SHEET_COLUMNS`]).
        expected: usize,
        /// Field count actually found.
        actual: usize,
    },

    /// A quoted field was still open at end of input.
    #[error("unterminated quoted field starting at line {line}")]
    UnterminatedQuote {
        /// Source line the open quote's row starts on (1-based).
        line: usize,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUP ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// No entry with the requested LCP code exists in the current snapshot.
    #[error("LCP ID {0} not found")]
    LcpNotFound(String),

    /// No entry with the requested wuqumo code exists in the current snapshot.
    #[error("Wuqumo ID {0} not found")]
    WuqumoNotFound(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl WuqumoError {
    /// Returns true if this error is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WuqumoError::LcpNotFound(_) | WuqumoError::WuqumoNotFound(_)
        )
    }

    /// Returns true if this error came from loading the sheet.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            WuqumoError::SheetIo(_)
                | WuqumoError::ColumnCountMismatch { .. }
                | WuqumoError::UnterminatedQuote { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WuqumoError::ColumnCountMismatch {
            line: 7,
            expected: 11,
            actual: 9,
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("11"));
        assert!(err.to_string().contains("9"));
    }

    #[test]
    fn test_error_classification() {
        assert!(WuqumoError::LcpNotFound("L1".into()).is_not_found());
        assert!(WuqumoError::WuqumoNotFound("W1".into()).is_not_found());
        assert!(!WuqumoError::LcpNotFound("L1".into()).is_load_error());

        let io = WuqumoError::SheetIo(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(io.is_load_error());
        assert!(!io.is_not_found());

        let quote = WuqumoError::UnterminatedQuote { line: 3 };
        assert!(quote.is_load_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err = WuqumoError::from(io);
        assert!(matches!(err, WuqumoError::SheetIo(_)));
    }
}
