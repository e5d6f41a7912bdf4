//! Raw sheet rows as produced by a [`SheetSource`](crate::traits::SheetSource).

use crate::constants::{LCP_FIELD, WUQUMO_FIELD};
use crate::types::TranscodeEntry;

/// One raw row of the transcode sheet.
///
/// A row always carries exactly
/// [`SHEET_COLUMNS`](crate::constants::SHEET_COLUMNS) fields — loaders
/// reject anything else before a `SheetRow` is ever constructed. Only
/// fields 0 and 2 are semantically used; the rest ride along unread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetRow {
    /// Source line this row starts on (1-based), kept for diagnostics.
    line: usize,
    /// The row's fields, in sheet order.
    fields: Vec<String>,
}

impl SheetRow {
    /// Creates a row from its source line and fields.
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Source line this row starts on (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// The row's fields, in sheet order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The wuqumo code (field 0).
    pub fn wuqumo(&self) -> &str {
        &self.fields[WUQUMO_FIELD]
    }

    /// The LCP code (field 2).
    pub fn lcp(&self) -> &str {
        &self.fields[LCP_FIELD]
    }

    /// Maps this row to a table entry.
    ///
    /// `sequence` is the row's 1-based position among all sheet rows.
    /// Returns `None` when the LCP field is empty — such rows are excluded
    /// from the table but still consume their sequence number, so ids are
    /// not contiguous when rows were skipped.
    pub fn to_entry(&self, sequence: u32) -> Option<TranscodeEntry> {
        if self.lcp().is_empty() {
            return None;
        }

        Some(TranscodeEntry::new(sequence, self.lcp(), self.wuqumo()))
    }
}
