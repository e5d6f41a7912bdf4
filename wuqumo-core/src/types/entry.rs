//! The transcode entry — one row of the lookup table.

use serde::{Deserialize, Serialize};

fn id_is_zero(id: &u32) -> bool {
    *id == 0
}

/// One entry of the LCP ↔ wuqumo lookup table.
///
/// Entries are numbered by their 1-based position among all sheet rows, so
/// ids stay stable across lookups within a snapshot but are not contiguous
/// when rows were skipped.
///
/// Serialization follows an omit-empty policy: a zero id or empty code is
/// left out of the JSON object entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeEntry {
    /// Sequence id, 1-based position among all sheet rows.
    #[serde(default, skip_serializing_if = "id_is_zero")]
    pub id: u32,
    /// LCP (LineColumnPage) code, sheet field 2. Never empty in an
    /// installed snapshot.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub lcp: String,
    /// Wuqumo code, sheet field 0. Not required to be unique.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub wuqumo: String,
}

impl TranscodeEntry {
    /// Creates a new entry.
    pub fn new(id: u32, lcp: impl Into<String>, wuqumo: impl Into<String>) -> Self {
        Self {
            id,
            lcp: lcp.into(),
            wuqumo: wuqumo.into(),
        }
    }

    /// Exact, case-sensitive match on the LCP code.
    pub fn matches_lcp(&self, id: &str) -> bool {
        self.lcp == id
    }

    /// Exact, case-sensitive match on the wuqumo code.
    pub fn matches_wuqumo(&self, id: &str) -> bool {
        self.wuqumo == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_all_fields() {
        let entry = TranscodeEntry::new(3, "L003", "W003");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["lcp"], "L003");
        assert_eq!(json["wuqumo"], "W003");
    }

    #[test]
    fn test_omit_empty_fields() {
        let entry = TranscodeEntry::new(1, "L001", "");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("wuqumo"));
        assert!(json.contains("lcp"));

        let empty = TranscodeEntry::default();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_deserialize_missing_fields() {
        let entry: TranscodeEntry = serde_json::from_str(r#"{"lcp":"L1"}"#).unwrap();
        assert_eq!(entry.id, 0);
        assert_eq!(entry.lcp, "L1");
        assert!(entry.wuqumo.is_empty());
    }

    #[test]
    fn test_matches_are_case_sensitive() {
        let entry = TranscodeEntry::new(1, "L001", "W001");
        assert!(entry.matches_lcp("L001"));
        assert!(!entry.matches_lcp("l001"));
        assert!(entry.matches_wuqumo("W001"));
        assert!(!entry.matches_wuqumo("w001"));
    }
}
