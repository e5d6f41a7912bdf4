//! Immutable snapshots of the transcode table.

use std::collections::HashMap;

use wuqumo_core::types::{SheetRow, TranscodeEntry};

/// One fully built generation of the lookup table.
///
/// A snapshot is constructed in a single pass from loader output and never
/// mutated afterwards; the cache publishes it behind an `Arc` so readers
/// share it without copying.
///
/// # Indexing
///
/// Both keys get a first-occurrence index (key → position of the first
/// entry carrying it), so lookups are O(1) while keeping the
/// first-match-wins semantics a linear scan in source order would have.
#[derive(Debug, Default)]
pub struct Snapshot {
    /// Entries in source-row order.
    entries: Vec<TranscodeEntry>,
    /// LCP code → position of its first entry.
    by_lcp: HashMap<String, usize>,
    /// Wuqumo code → position of its first entry.
    by_wuqumo: HashMap<String, usize>,
}

impl Snapshot {
    /// Builds a snapshot from raw sheet rows.
    ///
    /// Rows with an empty LCP field are dropped, but every row consumes a
    /// sequence number: entry ids are the 1-based row position, unique but
    /// not contiguous when rows were skipped.
    pub fn from_rows(rows: &[SheetRow]) -> Self {
        let mut entries = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if let Some(entry) = row.to_entry(idx as u32 + 1) {
                entries.push(entry);
            }
        }

        let mut by_lcp = HashMap::with_capacity(entries.len());
        let mut by_wuqumo = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            by_lcp.entry(entry.lcp.clone()).or_insert(pos);
            by_wuqumo.entry(entry.wuqumo.clone()).or_insert(pos);
        }

        Self {
            entries,
            by_lcp,
            by_wuqumo,
        }
    }

    /// Entries in source-row order.
    pub fn entries(&self) -> &[TranscodeEntry] {
        &self.entries
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose LCP code equals `id`, if any.
    pub fn get_by_lcp(&self, id: &str) -> Option<&TranscodeEntry> {
        self.by_lcp.get(id).map(|&pos| &self.entries[pos])
    }

    /// First entry whose wuqumo code equals `id`, if any.
    pub fn get_by_wuqumo(&self, id: &str) -> Option<&TranscodeEntry> {
        self.by_wuqumo.get(id).map(|&pos| &self.entries[pos])
    }
}
